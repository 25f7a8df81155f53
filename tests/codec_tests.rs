//! Codec Integration Tests
//!
//! Tests for the JSON wire format: round trips of boards and games, and the
//! specific errors for missing or unknown piece discriminators.

use fdchess::game::codec::{decode_board, decode_game, encode_board, encode_game};
use fdchess::{Board, ChessService, Color, GameError, MoveRequest, PieceKind, Position};
use serde_json::Value;

fn board_with_capture() -> Board {
    let mut board = Board::empty();
    board.add_piece(PieceKind::King, Color::White, Position::new(0, 4)).unwrap();
    board.add_piece(PieceKind::King, Color::Black, Position::new(7, 4)).unwrap();
    board.add_piece(PieceKind::Rook, Color::White, Position::new(0, 0)).unwrap();
    board.add_piece(PieceKind::Bishop, Color::Black, Position::new(5, 0)).unwrap();
    board.move_piece(Position::new(0, 0), Position::new(5, 0)).unwrap();
    board
}

#[test]
fn test_board_round_trip_keeps_provenance() {
    //! Ids, squares and capture provenance survive encode/decode
    let board = board_with_capture();

    let decoded = decode_board(&encode_board(&board).unwrap()).unwrap();

    assert_eq!(decoded, board);
    let bishop = decoded.piece_by_id(4).unwrap();
    assert!(bishop.is_removed);
    assert_eq!(bishop.position, Position::REMOVED);
    assert_eq!(bishop.removed_at, Some(Position::new(5, 0)));
    assert_eq!(bishop.removed_by.as_deref(), Some("white Rook"));
}

#[test]
fn test_game_round_trip_mid_game() {
    let mut service = ChessService::new();
    service
        .make_move(MoveRequest::from_to(Position::new(1, 4), Position::new(3, 4)))
        .unwrap();

    let json = encode_game(service.game_state()).unwrap();
    let decoded = decode_game(&json).unwrap();

    assert_eq!(&decoded, service.game_state());
    assert_eq!(decoded.current_turn, Some(Color::Black));
}

#[test]
fn test_wire_format_field_names() {
    let json = encode_board(&board_with_capture()).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    let piece = &value["pieces"][0];

    assert_eq!(piece["type"], "King");
    assert_eq!(piece["color"], "white");
    assert_eq!(piece["position"]["row"], 0);
    assert_eq!(piece["position"]["column"], 4);
    assert_eq!(piece["isRemoved"], false);
    assert!(piece["removedBy"].is_null());
}

#[test]
fn test_missing_type_is_reported() {
    let json = encode_board(&board_with_capture()).unwrap();
    let mut value: Value = serde_json::from_str(&json).unwrap();
    value["pieces"][2]
        .as_object_mut()
        .unwrap()
        .remove("type");

    assert!(matches!(
        decode_board(&value.to_string()),
        Err(GameError::MissingPieceType)
    ));
}

#[test]
fn test_unknown_type_is_reported() {
    let json = encode_game(ChessService::new().game_state()).unwrap();
    let mut value: Value = serde_json::from_str(&json).unwrap();
    value["board"]["pieces"][5]["type"] = Value::from("Dragon");

    match decode_game(&value.to_string()) {
        Err(GameError::UnknownPieceType(name)) => assert_eq!(name, "Dragon"),
        other => panic!("expected UnknownPieceType, got {:?}", other),
    }
}

#[test]
fn test_type_is_case_insensitive_on_input() {
    let json = encode_board(&board_with_capture()).unwrap();
    let mut value: Value = serde_json::from_str(&json).unwrap();
    value["pieces"][2]["type"] = Value::from("rOOK");

    let board = decode_board(&value.to_string()).unwrap();
    assert_eq!(board.piece_by_id(3).unwrap().kind, PieceKind::Rook);
}

#[test]
fn test_shared_squares_are_rejected() {
    let json = encode_board(&board_with_capture()).unwrap();
    let mut value: Value = serde_json::from_str(&json).unwrap();
    value["pieces"][2]["position"] = serde_json::json!({"row": 0, "column": 4});

    assert!(matches!(
        decode_board(&value.to_string()),
        Err(GameError::InvalidSnapshot { .. })
    ));
}
