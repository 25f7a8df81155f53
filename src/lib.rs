//! FDChess - a chess rules engine
//!
//! Maintains one authoritative game, validates and applies moves, and detects
//! check, checkmate, stalemate and promotion.
//!
//! ```rust
//! use fdchess::{ChessService, GameStatus, MoveRequest, Position};
//!
//! let mut service = ChessService::new();
//! let outcome = service
//!     .make_move(MoveRequest::from_to(Position::new(1, 4), Position::new(3, 4)))
//!     .unwrap();
//! assert_eq!(outcome.status, GameStatus::Active);
//! ```

pub mod core;
pub mod game;

pub use game::{
    Board, BoardDescriber, CapturedPieces, ChessService, Color, Game, GameError, GameResult,
    GameStatus, MoveHistory, MoveOutcome, MoveRecord, MoveRequest, MoveRules, Piece, PieceKind,
    PieceRef, Position, QuickGameSimulation, SharedChessService, TextBoardDescriber,
};
