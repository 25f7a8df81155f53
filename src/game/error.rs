//! Error types for game module
//!
//! Provides the error taxonomy for move validation, promotion, lookups and the
//! wire format. Expected gameplay failures are ordinary values; the two board
//! invariant violations ([`GameError::KingNotFound`] and
//! [`GameError::IllegalKingCapture`]) are reported through the same type but
//! flagged by [`GameError::is_fatal`].

use crate::game::components::GameStatus;
use crate::game::types::{Color, Position};

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// No piece at the source, geometrically illegal, or leaves own king in check
    #[error("Invalid move: {message}")]
    InvalidMove { message: String },

    /// Piece belongs to the side that is not on move
    #[error("Wrong turn: it is {expected}'s move, piece is {found}")]
    WrongTurn { expected: Color, found: Color },

    /// Unknown piece id
    #[error("Piece {piece_id} not found")]
    NotFound { piece_id: u32 },

    /// Promotion request that cannot be honoured
    #[error("Invalid promotion: {message}")]
    InvalidPromotion { message: String },

    /// Board mutation requested from an empty square
    #[error("No piece at the starting position {position}")]
    NoPieceAtSource { position: Position },

    /// Piece rules reject the destination
    #[error("Illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// Game already finished (checkmate, stalemate or ended)
    #[error("Game is over ({status:?}); no further moves are accepted")]
    GameOver { status: GameStatus },

    /// Square name could not be parsed
    #[error("Invalid square notation: {input:?}")]
    InvalidNotation { input: String },

    /// Serialized piece without a `type` discriminator
    #[error("Serialized piece is missing its \"type\" field")]
    MissingPieceType,

    /// Serialized piece with an unrecognised `type` discriminator
    #[error("Unknown piece type: {0:?}")]
    UnknownPieceType(String),

    /// Snapshot decoded but violates board invariants
    #[error("Invalid game snapshot: {message}")]
    InvalidSnapshot { message: String },

    /// Snapshot JSON could not be read or written
    #[error("Snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A color has no king on the board
    #[error("King not found on the board for {color}")]
    KingNotFound { color: Color },

    /// A move tried to capture a king
    #[error("The king at {position} cannot be removed from the board")]
    IllegalKingCapture { position: Position },
}

impl GameError {
    pub fn invalid_move(message: impl Into<String>) -> Self {
        GameError::InvalidMove {
            message: message.into(),
        }
    }

    pub fn invalid_promotion(message: impl Into<String>) -> Self {
        GameError::InvalidPromotion {
            message: message.into(),
        }
    }

    /// True for board invariant violations
    ///
    /// These never come from a user mistake; seeing one means move
    /// application is broken and the game state can no longer be trusted.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::KingNotFound { .. } | GameError::IllegalKingCapture { .. }
        )
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(GameError::KingNotFound { color: Color::White }.is_fatal());
        assert!(GameError::IllegalKingCapture {
            position: Position::new(7, 4)
        }
        .is_fatal());
        assert!(!GameError::invalid_move("blocked").is_fatal());
        assert!(!GameError::NotFound { piece_id: 99 }.is_fatal());
    }

    #[test]
    fn test_error_messages_name_squares() {
        let err = GameError::IllegalMove {
            from: Position::new(1, 4),
            to: Position::new(4, 4),
        };
        assert_eq!(err.to_string(), "Illegal move from E2 to E5");
    }
}
