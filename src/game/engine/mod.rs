//! Game engine - turn and move orchestration
//!
//! - [`Game`] - The authoritative state of one game (board, turn, status, history)
//! - [`ChessService`] - Accepts move and promotion requests and drives the
//!   status machine
//!
//! The engine never owns global state: callers create a [`ChessService`] and
//! wrap it in a [`SharedChessService`] when several threads need it.

pub mod game;
pub mod service;

pub use game::Game;
pub use service::{
    ChessService, MoveOutcome, MoveRequest, PieceRef, SharedChessService, DEFAULT_GAME_NAME,
};
