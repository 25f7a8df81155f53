//! Check, checkmate and stalemate detection
//!
//! All three questions are answered by probing: a candidate move is played on
//! a disposable copy of the board ([`Board::simulate_move`]) and the copy is
//! asked whether the king is still attacked. The board passed in is only ever
//! read, so every function here leaves it exactly as it found it.
//!
//! # Search Order
//!
//! Checkmate looks for an escape in two phases and stops at the first one:
//! 1. King steps to each of its (up to) 8 neighbours
//! 2. Every other friendly move (blocks and captures)
//!
//! Stalemate runs the same exhaustive search over all friendly moves, king
//! included, but only when the king is not currently in check.

use super::board_state::Board;
use super::piece_moves::MoveRules;
use crate::game::error::GameResult;
use crate::game::types::{Color, Position};

/// Offsets to the 8 squares around a king
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Whether the king of `color` is attacked
pub fn is_in_check(board: &Board, color: Color) -> GameResult<bool> {
    let king = board.king(color)?;
    Ok(board.is_position_under_attack(king.position, color))
}

/// Whether `color` is in check and has no move that resolves it
pub fn is_checkmate(board: &Board, color: Color) -> GameResult<bool> {
    if !is_in_check(board, color)? {
        return Ok(false);
    }

    let king_square = board.king(color)?.position;
    for (row_delta, column_delta) in KING_OFFSETS {
        let target = king_square.offset(row_delta, column_delta);
        if !target.is_on_board() {
            continue;
        }
        if board.piece_at(target).is_some_and(|p| p.color == color) {
            continue;
        }
        if !leaves_king_in_check(board, king_square, target, color)? {
            return Ok(false);
        }
    }

    Ok(!has_safe_move(board, color)?)
}

/// Whether `color` is not in check but every move it has would leave its king attacked
pub fn is_stalemate(board: &Board, color: Color) -> GameResult<bool> {
    if is_in_check(board, color)? {
        return Ok(false);
    }

    Ok(!has_safe_move(board, color)?)
}

/// Whether any active piece of `color` has a move after which its king is safe
pub fn has_safe_move(board: &Board, color: Color) -> GameResult<bool> {
    for piece in board.pieces_of(color) {
        for target in piece.possible_moves(board) {
            if !leaves_king_in_check(board, piece.position, target, color)? {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

/// Probe one move and report whether `color`'s king is attacked afterwards
pub fn leaves_king_in_check(
    board: &Board,
    from: Position,
    to: Position,
    color: Color,
) -> GameResult<bool> {
    let trial = board.simulate_move(from, to);
    is_in_check(&trial, color)
}
