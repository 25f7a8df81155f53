//! Game state
//!
//! A [`Game`] is the single authoritative state of one chess game: the board,
//! whose turn it is, the current status and the move history. It is owned by
//! [`super::ChessService`], which is the only code that mutates it during play.

use serde::{Deserialize, Serialize};

use crate::game::components::GameStatus;
use crate::game::error::{GameError, GameResult};
use crate::game::resources::MoveHistory;
use crate::game::rules::Board;
use crate::game::types::{Color, PieceKind, Position};

fn first_move() -> u32 {
    1
}

/// One chess game
///
/// # Turn Flow
///
/// ```text
/// Move 1: White plays → switch_turn() → Black plays → switch_turn() → Move 2: White plays
/// ```
///
/// `current_turn` is `None` once the game reaches a terminal status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u32,
    pub name: String,
    pub board: Board,
    pub current_turn: Option<Color>,
    pub status: GameStatus,
    #[serde(default = "first_move")]
    pub move_number: u32,
    /// Square of the pawn waiting to be promoted
    #[serde(default)]
    pub pending_promotion: Option<Position>,
    #[serde(default)]
    pub history: MoveHistory,
}

impl Game {
    /// A game on `board` with White to move
    pub fn new(name: impl Into<String>, board: Board) -> Self {
        Game {
            id: 1,
            name: name.into(),
            board,
            current_turn: Some(Color::White),
            status: GameStatus::Active,
            move_number: 1,
            pending_promotion: None,
            history: MoveHistory::default(),
        }
    }

    /// A game in the standard starting position
    pub fn standard(name: impl Into<String>) -> Self {
        Game::new(name, Board::standard())
    }

    /// Hand the move to the other side
    ///
    /// The move number goes up once Black has moved.
    pub fn switch_turn(&mut self) {
        if let Some(color) = self.current_turn {
            if color == Color::Black {
                self.move_number += 1;
            }
            self.current_turn = Some(color.opposite());
        }
    }

    /// Stop turn alternation for good (terminal statuses)
    pub fn freeze_turn(&mut self) {
        self.current_turn = None;
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Check that a game loaded from outside is internally consistent
    pub fn validate(&self) -> GameResult<()> {
        self.board.validate()?;

        let invalid = |message: &str| {
            Err(GameError::InvalidSnapshot {
                message: message.to_string(),
            })
        };

        match (self.status.is_terminal(), self.current_turn) {
            (true, Some(_)) => return invalid("a finished game cannot have a side to move"),
            (false, None) => return invalid("a running game needs a side to move"),
            _ => {}
        }

        match (self.status, self.pending_promotion) {
            (GameStatus::PromotionPending, Some(square)) => {
                let waiting = self
                    .board
                    .piece_at(square)
                    .is_some_and(|p| p.kind == PieceKind::Pawn && p.is_on_promotion_row());
                if !waiting {
                    return invalid("pending promotion does not point at a pawn on its last rank");
                }
            }
            (GameStatus::PromotionPending, None) => {
                return invalid("promotion pending without a square");
            }
            (_, Some(_)) => return invalid("promotion square set outside of a pending promotion"),
            _ => {}
        }

        // Only the pending pawn, owned by the side still on move, may sit unpromoted on its
        // last rank. A game ended while a promotion was pending keeps its pawn.
        for pawn in self.board.active_pieces().filter(|p| p.is_on_promotion_row()) {
            let pending = self.status == GameStatus::PromotionPending
                && self.pending_promotion == Some(pawn.position)
                && self.current_turn == Some(pawn.color);
            if !pending && self.status != GameStatus::Ended {
                return invalid("unpromoted pawn on its last rank");
            }
        }

        // The side that just moved cannot have left its king attacked
        if self.status != GameStatus::PromotionPending {
            if let Some(to_move) = self.current_turn {
                if self.board.is_king_in_check(to_move.opposite())? {
                    return invalid("the side not on move is in check");
                }
            }
        }

        Ok(())
    }
}
