//! Scripted quick games
//!
//! A [`QuickGameSimulation`] replays a fixed list of moves through a
//! [`ChessService`], exactly as a client would submit them, and collects
//! every outcome. Used by the `simulate` command and as an end-to-end smoke
//! test of the engine.

use tracing::{info, warn};

use crate::game::engine::{ChessService, MoveOutcome, MoveRequest};
use crate::game::error::GameResult;
use crate::game::types::Position;

/// A named, fixed sequence of move requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickGameSimulation {
    pub name: String,
    pub moves: Vec<MoveRequest>,
}

impl QuickGameSimulation {
    pub fn new(name: impl Into<String>, moves: Vec<MoveRequest>) -> Self {
        QuickGameSimulation {
            name: name.into(),
            moves,
        }
    }

    /// 1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7#
    pub fn scholars_mate() -> Self {
        let step = |from: (i8, i8), to: (i8, i8)| {
            MoveRequest::from_to(Position::new(from.0, from.1), Position::new(to.0, to.1))
        };

        QuickGameSimulation::new(
            "Scholar's Mate",
            vec![
                step((1, 4), (3, 4)), // e4
                step((6, 4), (4, 4)), // e5
                step((0, 5), (3, 2)), // Bc4
                step((7, 1), (5, 2)), // Nc6
                step((0, 3), (4, 7)), // Qh5
                step((7, 6), (5, 5)), // Nf6
                step((4, 7), (6, 5)), // Qxf7#
            ],
        )
    }

    /// Submit every move in order, recording each result
    ///
    /// Rejected moves do not stop the run; their errors are kept in the
    /// returned list at the same index as the request.
    pub fn run(&self, service: &mut ChessService) -> Vec<GameResult<MoveOutcome>> {
        info!("[SIMULATION] Running '{}' ({} moves)", self.name, self.moves.len());

        let mut results = Vec::with_capacity(self.moves.len());
        for (index, request) in self.moves.iter().enumerate() {
            let result = service.make_move(*request);
            match &result {
                Ok(outcome) => info!(
                    "[SIMULATION] Move {}: {} ({:?})",
                    index + 1,
                    outcome.message,
                    outcome.status
                ),
                Err(err) => warn!("[SIMULATION] Move {} failed: {}", index + 1, err),
            }
            results.push(result);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::GameStatus;

    #[test]
    fn test_scholars_mate_ends_in_checkmate() {
        let mut service = ChessService::new();
        let results = QuickGameSimulation::scholars_mate().run(&mut service);

        assert_eq!(results.len(), 7);
        assert!(results.iter().all(|r| r.is_ok()), "every move should be accepted");

        let last = results.last().unwrap().as_ref().unwrap();
        assert_eq!(last.status, GameStatus::Checkmate);
        assert_eq!(last.message, "Checkmate! White wins");
        assert_eq!(service.game_state().current_turn, None);
        assert_eq!(
            service.move_history().last_move().unwrap().to_notation(),
            "H5xF7#"
        );
    }
}
