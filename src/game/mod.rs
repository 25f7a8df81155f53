//! Chess game logic module - rules engine and game orchestration
//!
//! Implements the full rule set for a single in-memory game: piece movement,
//! check, checkmate, stalemate and promotion. Nothing in here does I/O; the
//! `core` module and the binary sit on top.
//!
//! # Module Organization
//!
//! - `types` - Colors, piece kinds and board positions
//! - `components` - Piece records, game status and move records
//! - `rules` - Pure chess logic (move validation, board state, king safety)
//! - `resources` - Derived views (captured pieces, move history)
//! - `engine` - The [`Game`] state and the [`ChessService`] state machine
//! - `codec` - JSON wire format with tagged piece decoding
//! - `describe` - The [`BoardDescriber`] seam and an ASCII implementation
//! - `simulation` - Scripted quick games
//!
//! # Move Pipeline
//!
//! 1. Resolve the piece and check the turn (`engine`)
//! 2. Check the move against the piece's movement rules (`rules::piece_moves`)
//! 3. Reject moves that leave the own king attacked (`rules::king_safety`)
//! 4. Apply the move and record captures (`rules::board_state`)
//! 5. Evaluate promotion, check, checkmate and stalemate (`engine`)
//!
//! Castling and en passant are not implemented.

pub mod codec;
pub mod components;
pub mod describe;
pub mod engine;
pub mod error;
pub mod resources;
pub mod rules;
pub mod simulation;
pub mod types;

pub use components::{GameStatus, MoveRecord, Piece};
pub use describe::{BoardDescriber, TextBoardDescriber};
pub use engine::{ChessService, Game, MoveOutcome, MoveRequest, PieceRef, SharedChessService};
pub use error::{GameError, GameResult};
pub use resources::{CapturedPieces, MoveHistory};
pub use rules::{Board, MoveRules};
pub use simulation::QuickGameSimulation;
pub use types::{Color, PieceKind, Position};
