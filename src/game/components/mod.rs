//! Chess game components module
//!
//! Components are plain data with little logic: pieces, game status and
//! move records.

pub mod piece;
pub mod game_state;

// Re-export all components for convenience
pub use game_state::*;
pub use piece::*;
