//! Captured pieces summary
//!
//! Groups the removed pieces of a board by the side that captured them and
//! calculates material advantage.
//!
//! # Material Values
//!
//! Standard chess piece values in pawns:
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0 (cannot be captured)
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: If White captured (Rook=5, Pawn=1) and Black captured (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns.

use serde::{Deserialize, Serialize};

use crate::game::rules::Board;
use crate::game::types::{Color, PieceKind};

/// Captured pieces for both sides
///
/// # Fields
///
/// - `white_captured`: Black pieces that White has captured
/// - `black_captured`: White pieces that Black has captured
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedPieces {
    /// Pieces captured by white (black pieces taken)
    pub white_captured: Vec<PieceKind>,
    /// Pieces captured by black (white pieces taken)
    pub black_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Collect every removed piece of `board`, in board order
    pub fn from_board(board: &Board) -> Self {
        let mut captured = CapturedPieces::default();
        for piece in board.removed_pieces() {
            captured.add_capture(piece.color, piece.kind);
        }
        captured
    }

    /// Record a piece capture
    ///
    /// `captured_piece_color` is the color of the piece that was taken; the
    /// other side gets the credit.
    pub fn add_capture(&mut self, captured_piece_color: Color, piece_kind: PieceKind) {
        match captured_piece_color {
            Color::White => self.black_captured.push(piece_kind),
            Color::Black => self.white_captured.push(piece_kind),
        }
    }

    /// Material difference in pawn units, positive when White is ahead
    pub fn material_advantage(&self) -> i32 {
        let white_score: i32 = self.white_captured.iter().map(|p| p.material_value()).sum();
        let black_score: i32 = self.black_captured.iter().map(|p| p.material_value()).sum();
        white_score - black_score
    }

    pub fn is_empty(&self) -> bool {
        self.white_captured.is_empty() && self.black_captured.is_empty()
    }
}
