//! Board state representation for move validation and execution
//!
//! [`Board`] owns every piece of a game, active and captured, and answers the
//! spatial questions the movement rules ask: who stands where, is a line
//! clear, is a square attacked. It is also the only place pieces are moved
//! and captured.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::king_safety;
use super::piece_moves::MoveRules;
use crate::game::components::Piece;
use crate::game::error::{GameError, GameResult};
use crate::game::types::{Color, PieceKind, Position};

/// Back rank order from column A to column H
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The set of pieces of one game plus spatial queries over them
///
/// The order of `pieces` carries no meaning but is kept stable so that
/// serialized boards compare byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub pieces: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// A board with no pieces
    pub fn empty() -> Self {
        Board {
            id: 1,
            name: String::from("Chess Board"),
            description: String::from("Standard 8x8 board"),
            pieces: Vec::new(),
        }
    }

    /// The standard 32-piece starting position
    ///
    /// White pieces get ids 1..=16 (back rank first, then pawns), Black pieces
    /// 17..=32 (pawns first, then back rank).
    pub fn standard() -> Self {
        let mut board = Board::empty();
        let mut next_id = 1;
        let mut place = |board: &mut Board, kind, color, position| {
            board.pieces.push(Piece::new(next_id, kind, color, position));
            next_id += 1;
        };

        for (column, kind) in BACK_RANK.iter().enumerate() {
            place(&mut board, *kind, Color::White, Position::new(0, column as i8));
        }
        for column in 0..8 {
            place(&mut board, PieceKind::Pawn, Color::White, Position::new(1, column));
        }
        for column in 0..8 {
            place(&mut board, PieceKind::Pawn, Color::Black, Position::new(6, column));
        }
        for (column, kind) in BACK_RANK.iter().enumerate() {
            place(&mut board, *kind, Color::Black, Position::new(7, column as i8));
        }

        board
    }

    /// Put a new piece on the board and return its id
    ///
    /// Ids are assigned as one past the largest id in use.
    pub fn add_piece(&mut self, kind: PieceKind, color: Color, position: Position) -> GameResult<u32> {
        if !position.is_on_board() {
            return Err(GameError::invalid_move(format!(
                "cannot place a piece off the board at ({}, {})",
                position.row, position.column
            )));
        }
        if self.is_position_occupied(position) {
            return Err(GameError::invalid_move(format!("{} is already occupied", position)));
        }
        if kind == PieceKind::King && self.king(color).is_ok() {
            return Err(GameError::invalid_move(format!("{} already has a king", color)));
        }

        let id = self.pieces.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.pieces.push(Piece::new(id, kind, color, position));
        Ok(id)
    }

    /// The piece in play on `position`, if any
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.index_at(position).map(|index| &self.pieces[index])
    }

    pub fn piece_at_mut(&mut self, position: Position) -> Option<&mut Piece> {
        let index = self.index_at(position)?;
        Some(&mut self.pieces[index])
    }

    pub fn piece_by_id(&self, id: u32) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    fn index_at(&self, position: Position) -> Option<usize> {
        if !position.is_on_board() {
            return None;
        }
        self.pieces
            .iter()
            .position(|p| !p.is_removed && p.position == position)
    }

    pub fn is_position_occupied(&self, position: Position) -> bool {
        self.index_at(position).is_some()
    }

    /// Whether `position` holds a piece of the other color than `color`
    pub fn is_position_occupied_by_opponent(&self, position: Position, color: Color) -> bool {
        self.piece_at(position).is_some_and(|p| p.color != color)
    }

    /// Whether every square strictly between `from` and `to` is empty
    ///
    /// Only straight and diagonal lines have a path; any other pair of squares
    /// reports `false`.
    pub fn is_path_clear(&self, from: Position, to: Position) -> bool {
        let dy = to.row - from.row;
        let dx = to.column - from.column;
        if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
            return false;
        }

        let (step_y, step_x) = (dy.signum(), dx.signum());
        let mut square = from.offset(step_y, step_x);
        while square != to {
            if self.is_position_occupied(square) {
                return false;
            }
            square = square.offset(step_y, step_x);
        }

        true
    }

    /// Whether a piece of the color opposing `color` attacks `position`
    pub fn is_position_under_attack(&self, position: Position, color: Color) -> bool {
        self.active_pieces()
            .filter(|p| p.color != color)
            .any(|p| p.attacks(position, self))
    }

    /// The king of `color`
    pub fn king(&self, color: Color) -> GameResult<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.is_king() && p.color == color && !p.is_removed)
            .ok_or(GameError::KingNotFound { color })
    }

    pub fn active_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| !p.is_removed)
    }

    pub fn removed_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_removed)
    }

    /// Active pieces of one color
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.active_pieces().filter(move |p| p.color == color)
    }

    /// Move the piece on `from` to `to`, capturing whatever stands there
    ///
    /// Returns the captured piece. Nothing is changed when an error is
    /// returned.
    pub fn move_piece(&mut self, from: Position, to: Position) -> GameResult<Option<Piece>> {
        let mover_index = self
            .index_at(from)
            .ok_or(GameError::NoPieceAtSource { position: from })?;

        if !self.pieces[mover_index].is_move_valid(to, self) {
            return Err(GameError::IllegalMove { from, to });
        }

        let mover = self.pieces[mover_index].clone();
        let mut captured = None;
        if let Some(target_index) = self.index_at(to) {
            let target = &mut self.pieces[target_index];
            if target.color != mover.color {
                if target.is_king() {
                    return Err(GameError::IllegalKingCapture { position: to });
                }
                target.mark_removed(&mover);
                debug!("[RULES] {} on {} captured {}", mover.label(), to, target.label());
                captured = Some(target.clone());
            }
        }

        self.pieces[mover_index].position = to;
        Ok(captured)
    }

    /// A copy of this board with the piece on `from` relocated to `to`
    ///
    /// Used by the king-safety searches. Any occupant of `to` is marked captured
    /// without legality or king checks; `self` is never touched. If `from` is
    /// empty the copy is returned unchanged.
    pub fn simulate_move(&self, from: Position, to: Position) -> Board {
        let mut trial = self.clone();
        let Some(mover_index) = trial.index_at(from) else {
            return trial;
        };

        if let Some(target_index) = trial.index_at(to) {
            let mover = trial.pieces[mover_index].clone();
            trial.pieces[target_index].mark_removed(&mover);
        }
        trial.pieces[mover_index].position = to;
        trial
    }

    pub fn is_king_in_check(&self, color: Color) -> GameResult<bool> {
        king_safety::is_in_check(self, color)
    }

    pub fn is_king_in_checkmate(&self, color: Color) -> GameResult<bool> {
        king_safety::is_checkmate(self, color)
    }

    pub fn is_king_in_stalemate(&self, color: Color) -> GameResult<bool> {
        king_safety::is_stalemate(self, color)
    }

    /// Check the structural invariants of a board built from outside data
    ///
    /// Exactly one king per color, unique ids, active pieces on distinct
    /// on-board squares, removed pieces parked on the sentinel.
    pub fn validate(&self) -> GameResult<()> {
        let invalid = |message: String| Err(GameError::InvalidSnapshot { message });

        for color in [Color::White, Color::Black] {
            let kings = self
                .pieces
                .iter()
                .filter(|p| p.is_king() && p.color == color)
                .count();
            match kings {
                0 => return Err(GameError::KingNotFound { color }),
                1 => {}
                n => return invalid(format!("{} has {} kings", color, n)),
            }
        }

        let mut ids = HashSet::new();
        let mut squares = HashSet::new();
        for piece in &self.pieces {
            if !ids.insert(piece.id) {
                return invalid(format!("duplicate piece id {}", piece.id));
            }
            if piece.is_removed {
                if piece.is_king() {
                    return invalid(format!("the {} king is marked removed", piece.color));
                }
                if !piece.position.is_removed_sentinel() {
                    return invalid(format!("removed piece {} still has a square", piece.id));
                }
            } else {
                if !piece.position.is_on_board() {
                    return invalid(format!("piece {} is off the board", piece.id));
                }
                if !squares.insert(piece.position) {
                    return invalid(format!("two pieces share {}", piece.position));
                }
            }
        }

        Ok(())
    }
}
