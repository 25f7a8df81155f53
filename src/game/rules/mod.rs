//! Chess rules module - pure game logic
//!
//! Implements move validation, board state management and king-safety
//! detection as plain functions and methods over [`Board`], so the whole rule
//! set can be unit tested without the engine around it.
//!
//! # Module Structure
//!
//! - `piece_moves` - Movement rules for each piece kind behind the `MoveRules` trait
//! - `board_state` - Board representation, occupancy queries and move execution
//! - `king_safety` - Check, checkmate and stalemate search
//!
//! Castling and en passant are not part of the rule set.

pub mod piece_moves;
pub mod board_state;
pub mod king_safety;


// Re-export commonly used items
pub use board_state::Board;
pub use piece_moves::MoveRules;
