//! Move history
//!
//! Chronological record of every accepted move of the current game, used for
//! move lists in front ends and for replaying a game in tests.

use serde::{Deserialize, Serialize};

use crate::game::components::MoveRecord;

/// Ordered list of all moves made since the game started
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Get the last move made
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn last_move_mut(&mut self) -> Option<&mut MoveRecord> {
        self.moves.last_mut()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn get_move(&self, index: usize) -> Option<&MoveRecord> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.moves.iter()
    }

    /// All moves in coordinate notation, oldest first
    pub fn to_notation(&self) -> Vec<String> {
        self.moves.iter().map(MoveRecord::to_notation).collect()
    }
}
