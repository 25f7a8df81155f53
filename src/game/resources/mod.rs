//! Game bookkeeping views
//!
//! - [`CapturedPieces`] - Material tracking and advantage calculation
//! - [`MoveHistory`] - Complete move record of the current game

pub mod captured;
pub mod history;

pub use captured::CapturedPieces;
pub use history::MoveHistory;
