//! Integration tests for fdchess configuration and game-state files
//!
//! Files are written under the system temp directory with per-test names.

use std::fs;
use std::path::PathBuf;

use fdchess::core::persistence::{load_game, save_game};
use fdchess::core::{load_config, save_config, EngineConfig};
use fdchess::{ChessService, Color, MoveRequest, Position};

/// Helper to get a fresh path for one test
fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fdchess-tests-{}", std::process::id()));
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_missing_config_gives_defaults() {
    //! Verifies that an absent file falls back to the default settings
    let config = load_config(&temp_path("absent.json"));

    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.game_name, "Default Game");
    assert_eq!(config.log_filter, "info");
    assert!(config.show_board);
    assert!(config.state_file.is_none());
}

#[test]
fn test_config_round_trip() {
    let path = temp_path("nested/config.json");
    let config = EngineConfig {
        game_name: String::from("Friday blitz"),
        log_filter: String::from("fdchess=debug"),
        state_file: Some(PathBuf::from("game.json")),
        show_board: false,
    };

    save_config(&config, &path).unwrap();

    assert_eq!(load_config(&path), config);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let path = temp_path("broken.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ this is not json").unwrap();

    assert_eq!(load_config(&path), EngineConfig::default());
}

#[test]
fn test_partial_config_fills_defaults() {
    let path = temp_path("partial.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"gameName": "Club night"}"#).unwrap();

    let config = load_config(&path);
    assert_eq!(config.game_name, "Club night");
    assert_eq!(config.log_filter, "info");
}

#[test]
fn test_game_state_file_round_trip() {
    let path = temp_path("state.json");
    assert!(load_game(&path).unwrap().is_none());

    let mut service = ChessService::new();
    service
        .make_move(MoveRequest::from_to(Position::new(1, 3), Position::new(3, 3)))
        .unwrap();
    save_game(&service, &path).unwrap();

    let game = load_game(&path).unwrap().unwrap();
    assert_eq!(&game, service.game_state());
    assert_eq!(game.current_turn, Some(Color::Black));
}

#[test]
fn test_corrupt_game_state_file_is_an_error() {
    let path = temp_path("corrupt-state.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[]").unwrap();

    assert!(load_game(&path).is_err());
}
