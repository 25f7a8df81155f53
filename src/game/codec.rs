//! JSON wire format for boards and games
//!
//! Pieces are written with an explicit `"type"` discriminator:
//!
//! ```json
//! {"type":"Knight","id":2,"color":"white","position":{"row":0,"column":1},
//!  "isRemoved":false,"removedBy":null,"removedAt":null}
//! ```
//!
//! Decoding checks every piece's discriminator before handing the document to
//! serde, so a missing or unrecognised `type` surfaces as
//! [`GameError::MissingPieceType`] / [`GameError::UnknownPieceType`] instead
//! of a generic parse error. Decoded boards and games are validated before
//! they are returned.

use serde_json::Value;

use crate::game::components::Piece;
use crate::game::engine::Game;
use crate::game::error::{GameError, GameResult};
use crate::game::rules::Board;
use crate::game::types::PieceKind;

/// Name of the piece discriminator field
pub const TYPE_FIELD: &str = "type";

pub fn encode_board(board: &Board) -> GameResult<String> {
    Ok(serde_json::to_string(board)?)
}

pub fn encode_game(game: &Game) -> GameResult<String> {
    Ok(serde_json::to_string(game)?)
}

/// Pretty-printed game, used for state files
pub fn encode_game_pretty(game: &Game) -> GameResult<String> {
    Ok(serde_json::to_string_pretty(game)?)
}

pub fn decode_board(json: &str) -> GameResult<Board> {
    let value: Value = serde_json::from_str(json)?;
    check_board_value(&value)?;

    let board: Board = serde_json::from_value(value)?;
    board.validate()?;
    Ok(board)
}

pub fn decode_game(json: &str) -> GameResult<Game> {
    let value: Value = serde_json::from_str(json)?;
    if let Some(board) = value.get("board") {
        check_board_value(board)?;
    }

    let game: Game = serde_json::from_value(value)?;
    game.validate()?;
    Ok(game)
}

/// Decode a single piece
pub fn decode_piece(json: &str) -> GameResult<Piece> {
    let value: Value = serde_json::from_str(json)?;
    piece_kind(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// Read the discriminator of one serialized piece
pub fn piece_kind(value: &Value) -> GameResult<PieceKind> {
    match value.get(TYPE_FIELD) {
        None | Some(Value::Null) => Err(GameError::MissingPieceType),
        Some(Value::String(name)) => name.parse(),
        Some(other) => Err(GameError::UnknownPieceType(other.to_string())),
    }
}

fn check_board_value(board: &Value) -> GameResult<()> {
    if let Some(pieces) = board.get("pieces").and_then(Value::as_array) {
        for piece in pieces {
            piece_kind(piece)?;
        }
    }
    Ok(())
}
