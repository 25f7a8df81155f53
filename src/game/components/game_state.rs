//! Game status and move records

use serde::{Deserialize, Serialize};

use crate::game::types::{Color, PieceKind, Position};

/// Where the game stands after the last accepted move
///
/// # State Transitions
///
/// ```text
/// Active ⇄ Check
/// Active / Check → PromotionPending → Active / Check / Checkmate / Stalemate
/// Active / Check → Checkmate | Stalemate
/// any → Ended
/// ```
///
/// Checkmate, Stalemate and Ended are terminal: no further moves are accepted
/// and the turn is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Active,
    Check,
    Checkmate,
    Stalemate,
    PromotionPending,
    Ended,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Ended
        )
    }

    /// Human-readable status line
    pub fn message(self) -> &'static str {
        match self {
            GameStatus::Active => "Game in progress",
            GameStatus::Check => "Check!",
            GameStatus::Checkmate => "Checkmate!",
            GameStatus::Stalemate => "Draw by stalemate",
            GameStatus::PromotionPending => "Pawn promotion pending",
            GameStatus::Ended => "Game ended",
        }
    }
}

/// One accepted move, as kept in the game's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub piece_id: u32,
    pub kind: PieceKind,
    pub color: Color,
    pub from: Position,
    pub to: Position,
    pub captured: Option<PieceKind>,
    /// Set on the record of the pawn move once the promotion is resolved
    pub promotion: Option<PieceKind>,
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl MoveRecord {
    /// Coordinate notation: `E2-E4`, `H5xF7#`, `E7-E8=Q+`
    pub fn to_notation(&self) -> String {
        let separator = if self.captured.is_some() { 'x' } else { '-' };
        let mut text = format!("{}{}{}", self.from, separator, self.to);
        if let Some(kind) = self.promotion {
            text.push('=');
            text.push(kind.symbol());
        }
        if self.is_checkmate {
            text.push('#');
        } else if self.is_check {
            text.push('+');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(captured: Option<PieceKind>) -> MoveRecord {
        MoveRecord {
            piece_id: 12,
            kind: PieceKind::Pawn,
            color: Color::White,
            from: Position::new(1, 4),
            to: Position::new(3, 4),
            captured,
            promotion: None,
            is_check: false,
            is_checkmate: false,
        }
    }

    #[test]
    fn test_status_default_is_active() {
        assert_eq!(GameStatus::default(), GameStatus::Active);
    }

    #[test]
    fn test_terminal_statuses() {
        //! Only checkmate, stalemate and ended stop the game
        assert!(GameStatus::Checkmate.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(GameStatus::Ended.is_terminal());
        assert!(!GameStatus::Active.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert!(!GameStatus::PromotionPending.is_terminal());
    }

    #[test]
    fn test_record_notation() {
        assert_eq!(record(None).to_notation(), "E2-E4");

        let mut capture = record(Some(PieceKind::Pawn));
        capture.is_checkmate = true;
        assert_eq!(capture.to_notation(), "E2xE4#");

        let mut promotion = record(None);
        promotion.promotion = Some(PieceKind::Queen);
        promotion.is_check = true;
        assert_eq!(promotion.to_notation(), "E2-E4=Q+");
    }
}
