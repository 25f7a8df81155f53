//! Chess service - the move/turn state machine
//!
//! [`ChessService`] owns one [`Game`] and is the only way to change it during
//! play. Every request goes through the same pipeline:
//!
//! ```text
//! resolve piece → turn check → pin check on a cloned board → apply on live board
//!   → promotion? → opponent check / checkmate / stalemate → status + turn
//! ```
//!
//! Expected failures (illegal moves, wrong turn, unknown ids, bad promotions)
//! come back as [`GameError`] values and leave the game untouched. Fatal
//! invariant violations are logged at error level before being returned.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::game::Game;
use crate::game::codec;
use crate::game::components::{GameStatus, MoveRecord, Piece};
use crate::game::describe::BoardDescriber;
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{CapturedPieces, MoveHistory};
use crate::game::rules::{king_safety, Board, MoveRules};
use crate::game::types::{Color, PieceKind, Position};

/// Name given to games created without one
pub const DEFAULT_GAME_NAME: &str = "Default Game";

/// A service shared between threads
///
/// The engine itself is single-threaded; this mutex is the one place where
/// concurrent callers are serialized.
pub type SharedChessService = Arc<Mutex<ChessService>>;

/// How a move request names the piece to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PieceRef {
    Id(u32),
    At(Position),
}

/// A request to move one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub piece: PieceRef,
    pub new_position: Position,
}

impl MoveRequest {
    /// Move whatever stands on `from`
    pub fn from_to(from: Position, to: Position) -> Self {
        MoveRequest {
            piece: PieceRef::At(from),
            new_position: to,
        }
    }

    /// Move the piece with the given id
    pub fn by_id(piece_id: u32, to: Position) -> Self {
        MoveRequest {
            piece: PieceRef::Id(piece_id),
            new_position: to,
        }
    }
}

/// Result of an accepted move or promotion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub status: GameStatus,
    pub message: String,
    /// The game as it stands after the request
    pub game: Game,
}

/// Owner of the authoritative game state
#[derive(Debug, Clone)]
pub struct ChessService {
    game: Game,
}

impl Default for ChessService {
    fn default() -> Self {
        ChessService::new()
    }
}

impl ChessService {
    /// A service holding a fresh standard game
    pub fn new() -> Self {
        ChessService::with_name(DEFAULT_GAME_NAME)
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        ChessService {
            game: Game::standard(name),
        }
    }

    /// A service continuing an existing game
    pub fn from_game(game: Game) -> GameResult<Self> {
        game.validate()?;
        Ok(ChessService { game })
    }

    pub fn into_shared(self) -> SharedChessService {
        Arc::new(Mutex::new(self))
    }

    pub fn game_state(&self) -> &Game {
        &self.game
    }

    pub fn board(&self) -> &Board {
        &self.game.board
    }

    /// Serialized form of the current game
    pub fn snapshot(&self) -> GameResult<String> {
        codec::encode_game(&self.game)
    }

    /// Replace the live game
    ///
    /// The incoming game is validated first; on error the live game is kept.
    pub fn set_game_state(&mut self, game: Game) -> GameResult<()> {
        game.validate()?;
        info!(
            "[ENGINE] Game state replaced: '{}' ({:?}, {} pieces)",
            game.name,
            game.status,
            game.board.active_pieces().count()
        );
        self.game = game;
        Ok(())
    }

    /// Decode a snapshot produced by [`ChessService::snapshot`] and make it live
    pub fn restore_snapshot(&mut self, json: &str) -> GameResult<()> {
        let game = codec::decode_game(json)?;
        self.set_game_state(game)
    }

    /// Start over from the standard position, keeping the game's name
    pub fn reset_game(&mut self) {
        let name = std::mem::take(&mut self.game.name);
        self.game = Game::standard(name);
        info!("[ENGINE] Game reset to the starting position");
    }

    /// End the game without a result on the board (resignation, abandonment)
    pub fn end_game(&mut self) {
        if !self.game.is_over() {
            self.game.status = GameStatus::Ended;
            self.game.pending_promotion = None;
            self.game.freeze_turn();
            info!("[ENGINE] Game ended on move {}", self.game.move_number);
        }
    }

    /// Validate and apply one move
    pub fn make_move(&mut self, request: MoveRequest) -> GameResult<MoveOutcome> {
        let result = self.apply_move(request);
        if let Err(err) = &result {
            report_rejection("Move", err);
        }
        result
    }

    /// Replace the pawn on `position` with a piece of `new_kind`
    pub fn promote_pawn(&mut self, position: Position, new_kind: PieceKind) -> GameResult<MoveOutcome> {
        let result = self.apply_promotion(position, new_kind);
        if let Err(err) = &result {
            report_rejection("Promotion", err);
        }
        result
    }

    /// [`ChessService::promote_pawn`] with the piece kind given by name
    pub fn promote_pawn_named(&mut self, position: Position, new_kind: &str) -> GameResult<MoveOutcome> {
        match new_kind.parse::<PieceKind>() {
            Ok(kind) => self.promote_pawn(position, kind),
            Err(_) => {
                let err = GameError::invalid_promotion(format!("unknown piece type {:?}", new_kind));
                report_rejection("Promotion", &err);
                Err(err)
            }
        }
    }

    /// Every square the piece's movement rules allow
    ///
    /// Not filtered for king safety; see [`ChessService::legal_moves`].
    pub fn possible_moves(&self, piece_id: u32) -> GameResult<Vec<Position>> {
        let piece = self.piece_by_id(piece_id)?;
        Ok(piece.possible_moves(&self.game.board))
    }

    /// The subset of [`ChessService::possible_moves`] that `make_move` accepts
    pub fn legal_moves(&self, piece_id: u32) -> GameResult<Vec<Position>> {
        let piece = self.piece_by_id(piece_id)?;
        let board = &self.game.board;

        let mut moves = Vec::new();
        for target in piece.possible_moves(board) {
            if !king_safety::leaves_king_in_check(board, piece.position, target, piece.color)? {
                moves.push(target);
            }
        }
        Ok(moves)
    }

    pub fn removed_pieces(&self) -> Vec<Piece> {
        self.game.board.removed_pieces().cloned().collect()
    }

    pub fn available_pieces(&self) -> Vec<Piece> {
        self.game.board.active_pieces().cloned().collect()
    }

    pub fn captured_summary(&self) -> CapturedPieces {
        CapturedPieces::from_board(&self.game.board)
    }

    pub fn move_history(&self) -> &MoveHistory {
        &self.game.history
    }

    pub fn describe_board(&self, describer: &dyn BoardDescriber) -> String {
        describer.describe_board(&self.game.board)
    }

    fn piece_by_id(&self, piece_id: u32) -> GameResult<&Piece> {
        self.game
            .board
            .piece_by_id(piece_id)
            .ok_or(GameError::NotFound { piece_id })
    }

    fn resolve_piece(&self, piece: PieceRef) -> GameResult<&Piece> {
        match piece {
            PieceRef::Id(piece_id) => {
                let piece = self.piece_by_id(piece_id)?;
                if piece.is_removed {
                    return Err(GameError::invalid_move(format!(
                        "piece {} has been captured",
                        piece_id
                    )));
                }
                Ok(piece)
            }
            PieceRef::At(position) => self
                .game
                .board
                .piece_at(position)
                .ok_or_else(|| GameError::invalid_move(format!("no piece at {}", position))),
        }
    }

    /// The side to move, or why no move is accepted right now
    fn side_to_move(&self) -> GameResult<Color> {
        if self.game.is_over() {
            return Err(GameError::GameOver {
                status: self.game.status,
            });
        }
        if let Some(square) = self.game.pending_promotion {
            return Err(GameError::invalid_move(format!(
                "pawn promotion pending on {}",
                square
            )));
        }
        self.game.current_turn.ok_or(GameError::GameOver {
            status: self.game.status,
        })
    }

    fn apply_move(&mut self, request: MoveRequest) -> GameResult<MoveOutcome> {
        let expected = self.side_to_move()?;
        let piece = self.resolve_piece(request.piece)?.clone();
        let (from, to) = (piece.position, request.new_position);

        if piece.color != expected {
            return Err(GameError::WrongTurn {
                expected,
                found: piece.color,
            });
        }

        // Pin check on a disposable copy
        let mut trial = self.game.board.clone();
        trial.move_piece(from, to)?;
        if trial.is_king_in_check(piece.color)? {
            return Err(GameError::invalid_move(format!(
                "{} to {} would put own king in check",
                piece.label(),
                to
            )));
        }

        let captured = self.game.board.move_piece(from, to)?;
        debug!(
            "[ENGINE] {} {} -> {}{}",
            piece.label(),
            from,
            to,
            captured
                .as_ref()
                .map(|c| format!(" captures {}", c.label()))
                .unwrap_or_default()
        );

        self.game.history.add_move(MoveRecord {
            piece_id: piece.id,
            kind: piece.kind,
            color: piece.color,
            from,
            to,
            captured: captured.map(|c| c.kind),
            promotion: None,
            is_check: false,
            is_checkmate: false,
        });

        if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row() {
            self.game.status = GameStatus::PromotionPending;
            self.game.pending_promotion = Some(to);
            info!("[ENGINE] {} pawn on {} awaits promotion", piece.color.name(), to);
            return Ok(self.outcome(format!("Pawn on {} must be promoted", to)));
        }

        self.finish_turn(piece.color)
    }

    fn apply_promotion(&mut self, position: Position, new_kind: PieceKind) -> GameResult<MoveOutcome> {
        if self.game.is_over() {
            return Err(GameError::GameOver {
                status: self.game.status,
            });
        }
        match self.game.pending_promotion {
            Some(pending) if self.game.status == GameStatus::PromotionPending => {
                if pending != position {
                    return Err(GameError::invalid_promotion(format!(
                        "the pawn waiting for promotion is on {}",
                        pending
                    )));
                }
            }
            _ => {
                return Err(GameError::invalid_promotion(format!(
                    "no promotion is pending on {}",
                    position
                )));
            }
        }

        let pawn = self
            .game
            .board
            .piece_at(position)
            .filter(|p| p.kind == PieceKind::Pawn)
            .ok_or_else(|| GameError::invalid_promotion(format!("no pawn at {}", position)))?;
        if !pawn.is_on_promotion_row() {
            return Err(GameError::invalid_promotion(format!(
                "pawn on {} has not reached the last rank",
                position
            )));
        }
        if !new_kind.is_promotion_target() {
            return Err(GameError::invalid_promotion(format!(
                "a pawn cannot become a {}",
                new_kind
            )));
        }

        let color = pawn.color;
        if let Some(piece) = self.game.board.piece_at_mut(position) {
            *piece = Piece::new(piece.id, new_kind, piece.color, piece.position);
        }
        self.game.pending_promotion = None;
        if let Some(record) = self.game.history.last_move_mut() {
            if record.to == position && record.kind == PieceKind::Pawn {
                record.promotion = Some(new_kind);
            }
        }
        info!("[ENGINE] {} pawn on {} promoted to {}", color.name(), position, new_kind);

        self.finish_turn(color)
    }

    /// Evaluate the opponent's position after `mover` completed a move
    fn finish_turn(&mut self, mover: Color) -> GameResult<MoveOutcome> {
        let opponent = mover.opposite();
        let board = &self.game.board;

        let message = if board.is_king_in_check(opponent)? {
            if board.is_king_in_checkmate(opponent)? {
                self.game.status = GameStatus::Checkmate;
                self.game.freeze_turn();
                self.mark_last_move(true, true);
                info!("[ENGINE] ========== CHECKMATE! ==========");
                info!("[ENGINE] {} wins on move {}", mover.name(), self.game.move_number);
                format!("Checkmate! {} wins", mover.name())
            } else {
                self.game.status = GameStatus::Check;
                self.game.switch_turn();
                self.mark_last_move(true, false);
                info!("[ENGINE] {} king is in check", opponent.name());
                format!("Check! {} to move", opponent.name())
            }
        } else if board.is_king_in_stalemate(opponent)? {
            self.game.status = GameStatus::Stalemate;
            self.game.freeze_turn();
            info!("[ENGINE] ========== STALEMATE! ==========");
            info!("[ENGINE] {} has no legal moves but is not in check", opponent.name());
            String::from("Stalemate! The game is a draw")
        } else {
            self.game.status = GameStatus::Active;
            self.game.switch_turn();
            String::from("Move successful")
        };

        Ok(self.outcome(message))
    }

    fn mark_last_move(&mut self, is_check: bool, is_checkmate: bool) {
        if let Some(record) = self.game.history.last_move_mut() {
            record.is_check = is_check;
            record.is_checkmate = is_checkmate;
        }
    }

    fn outcome(&self, message: String) -> MoveOutcome {
        MoveOutcome {
            status: self.game.status,
            message,
            game: self.game.clone(),
        }
    }
}

fn report_rejection(action: &str, err: &GameError) {
    if err.is_fatal() {
        error!("[ENGINE] FATAL: {} aborted, board invariant violated: {}", action, err);
    } else {
        warn!("[ENGINE] {} rejected: {}", action, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: (i8, i8), to: (i8, i8)) -> MoveRequest {
        MoveRequest::from_to(Position::new(from.0, from.1), Position::new(to.0, to.1))
    }

    #[test]
    fn test_opening_move_switches_turn() {
        let mut service = ChessService::new();

        let outcome = service.make_move(mv((1, 4), (3, 4))).unwrap();

        assert_eq!(outcome.status, GameStatus::Active);
        assert_eq!(outcome.message, "Move successful");
        assert_eq!(service.game_state().current_turn, Some(Color::Black));
        assert_eq!(service.move_history().len(), 1);
    }

    #[test]
    fn test_wrong_turn_is_rejected() {
        let mut service = ChessService::new();

        let err = service.make_move(mv((6, 4), (4, 4))).unwrap_err();

        assert!(matches!(
            err,
            GameError::WrongTurn {
                expected: Color::White,
                found: Color::Black
            }
        ));
        assert_eq!(service.game_state().current_turn, Some(Color::White));
    }

    #[test]
    fn test_move_from_empty_square_is_invalid() {
        let mut service = ChessService::new();
        let err = service.make_move(mv((3, 3), (4, 3))).unwrap_err();
        assert!(matches!(err, GameError::InvalidMove { .. }));
    }

    #[test]
    fn test_move_by_unknown_id_is_not_found() {
        let mut service = ChessService::new();
        let err = service
            .make_move(MoveRequest::by_id(99, Position::new(3, 4)))
            .unwrap_err();
        assert!(matches!(err, GameError::NotFound { piece_id: 99 }));
    }

    #[test]
    fn test_move_by_id() {
        //! Piece 13 is the white e-pawn in the standard layout
        let mut service = ChessService::new();
        service
            .make_move(MoveRequest::by_id(13, Position::new(3, 4)))
            .unwrap();
        assert_eq!(service.board().piece_by_id(13).unwrap().position, Position::new(3, 4));
    }

    #[test]
    fn test_possible_moves_unknown_id() {
        let service = ChessService::new();
        assert!(matches!(
            service.possible_moves(0),
            Err(GameError::NotFound { piece_id: 0 })
        ));
    }

    #[test]
    fn test_end_game_freezes_turn() {
        let mut service = ChessService::new();
        service.end_game();

        assert_eq!(service.game_state().status, GameStatus::Ended);
        assert_eq!(service.game_state().current_turn, None);
        assert!(matches!(
            service.make_move(mv((1, 4), (3, 4))),
            Err(GameError::GameOver {
                status: GameStatus::Ended
            })
        ));
    }

    #[test]
    fn test_promotion_requires_a_pending_pawn() {
        //! A pawn already standing on its last rank cannot be promoted out of turn
        let mut board = Board::empty();
        board.add_piece(PieceKind::King, Color::White, Position::new(7, 7)).unwrap();
        board.add_piece(PieceKind::King, Color::Black, Position::new(5, 0)).unwrap();
        board.add_piece(PieceKind::Pawn, Color::Black, Position::new(0, 4)).unwrap();
        let mut service = ChessService {
            game: Game::new("Test", board),
        };

        let err = service.promote_pawn(Position::new(0, 4), PieceKind::Queen).unwrap_err();

        assert!(matches!(err, GameError::InvalidPromotion { .. }));
        assert_eq!(service.game_state().current_turn, Some(Color::White));
        assert_eq!(service.game_state().status, GameStatus::Active);
        assert_eq!(
            service.board().piece_at(Position::new(0, 4)).unwrap().kind,
            PieceKind::Pawn
        );
    }

    #[test]
    fn test_reset_keeps_name() {
        let mut service = ChessService::with_name("Club night");
        service.make_move(mv((1, 4), (3, 4))).unwrap();

        service.reset_game();

        assert_eq!(service.game_state().name, "Club night");
        assert!(service.move_history().is_empty());
        assert_eq!(service.game_state().current_turn, Some(Color::White));
    }

    #[test]
    fn test_shared_service_serializes_callers() {
        //! Two threads each make one move through the shared handle
        let shared = ChessService::new().into_shared();

        let white = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || shared.lock().make_move(mv((1, 4), (3, 4))).is_ok())
        };
        assert!(white.join().unwrap());

        let black = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || shared.lock().make_move(mv((6, 4), (4, 4))).is_ok())
        };
        assert!(black.join().unwrap());

        assert_eq!(shared.lock().move_history().len(), 2);
    }
}
