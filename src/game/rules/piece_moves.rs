//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move, exposed through the
//! [`MoveRules`] capability trait. Every piece kind shares one [`Piece`] struct
//! and dispatches on its [`PieceKind`] tag.
//!
//! All rules are pure with respect to the board they are given. The king's
//! safety lookahead works on a throwaway clone (see [`Board::simulate_move`]).

use super::board_state::Board;
use crate::game::components::Piece;
use crate::game::types::{Color, PieceKind, Position};

/// Movement capability shared by all piece kinds
pub trait MoveRules {
    /// Whether this piece may move to `target` on `board`
    fn is_move_valid(&self, target: Position, board: &Board) -> bool;

    /// Every square for which [`MoveRules::is_move_valid`] holds, row-major
    fn possible_moves(&self, board: &Board) -> Vec<Position>;

    /// Whether this piece attacks `target`
    ///
    /// Same as `is_move_valid` except for pawns (diagonals only) and kings
    /// (plain one-square reach, no safety lookahead). Keeping the king's
    /// reach geometric stops attack detection from recursing into the other
    /// king's safety check.
    fn attacks(&self, target: Position, board: &Board) -> bool;
}

impl MoveRules for Piece {
    fn is_move_valid(&self, target: Position, board: &Board) -> bool {
        if !can_land_on(self, target, board) {
            return false;
        }

        let from = self.position;
        match self.kind {
            PieceKind::Pawn => is_valid_pawn_move(from, target, self.color, board),
            PieceKind::Knight => is_valid_knight_move(from, target),
            PieceKind::Bishop => is_valid_bishop_move(from, target, board),
            PieceKind::Rook => is_valid_rook_move(from, target, board),
            PieceKind::Queen => is_valid_queen_move(from, target, board),
            PieceKind::King => {
                is_valid_king_step(from, target) && is_king_destination_safe(self, target, board)
            }
        }
    }

    fn possible_moves(&self, board: &Board) -> Vec<Position> {
        if self.is_removed {
            return Vec::new();
        }

        Position::all_squares()
            .filter(|&to| self.is_move_valid(to, board))
            .collect()
    }

    fn attacks(&self, target: Position, board: &Board) -> bool {
        if !can_land_on(self, target, board) {
            return false;
        }

        match self.kind {
            PieceKind::Pawn => is_pawn_diagonal(self.position, target, self.color),
            PieceKind::King => is_valid_king_step(self.position, target),
            _ => self.is_move_valid(target, board),
        }
    }
}

/// Checks common to every piece kind
///
/// The piece must be in play, the target on the board and different from the
/// current square, and not occupied by a friendly piece.
fn can_land_on(piece: &Piece, target: Position, board: &Board) -> bool {
    if piece.is_removed || !target.is_on_board() || target == piece.position {
        return false;
    }

    match board.piece_at(target) {
        Some(occupant) => occupant.color != piece.color,
        None => true,
    }
}

fn is_valid_pawn_move(from: Position, to: Position, color: Color, board: &Board) -> bool {
    let direction = color.forward();
    let dx = to.column - from.column;
    let dy = to.row - from.row;

    // Forward move
    if dx == 0 && dy == direction {
        return !board.is_position_occupied(to);
    }

    // Double move from the home rank
    if dx == 0 && dy == 2 * direction && from.row == color.pawn_home_row() {
        let intermediate = from.offset(direction, 0);
        return !board.is_position_occupied(intermediate) && !board.is_position_occupied(to);
    }

    // Capture diagonally
    if is_pawn_diagonal(from, to, color) {
        return board.is_position_occupied_by_opponent(to, color);
    }

    false
}

fn is_pawn_diagonal(from: Position, to: Position, color: Color) -> bool {
    (to.column - from.column).abs() == 1 && to.row - from.row == color.forward()
}

fn is_valid_knight_move(from: Position, to: Position) -> bool {
    let dx = (to.column - from.column).abs();
    let dy = (to.row - from.row).abs();
    (dx == 2 && dy == 1) || (dx == 1 && dy == 2)
}

fn is_valid_bishop_move(from: Position, to: Position, board: &Board) -> bool {
    let dx = (to.column - from.column).abs();
    let dy = (to.row - from.row).abs();

    // Must move diagonally
    if dx != dy {
        return false;
    }

    board.is_path_clear(from, to)
}

fn is_valid_rook_move(from: Position, to: Position, board: &Board) -> bool {
    // Must move horizontally or vertically
    if from.row != to.row && from.column != to.column {
        return false;
    }

    board.is_path_clear(from, to)
}

fn is_valid_queen_move(from: Position, to: Position, board: &Board) -> bool {
    is_valid_rook_move(from, to, board) || is_valid_bishop_move(from, to, board)
}

fn is_valid_king_step(from: Position, to: Position) -> bool {
    let dx = (to.column - from.column).abs();
    let dy = (to.row - from.row).abs();
    dx.max(dy) == 1
}

/// The king may not step onto a square the opponent attacks once it stands there
fn is_king_destination_safe(king: &Piece, target: Position, board: &Board) -> bool {
    let trial = board.simulate_move(king.position, target);
    !trial.is_position_under_attack(target, king.color)
}
