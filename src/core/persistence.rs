//! Game state files
//!
//! The `play` command keeps its game in a JSON state file so a session can be
//! picked up later. The file holds exactly what [`ChessService::snapshot`]
//! produces, pretty-printed.

use std::fs;
use std::path::Path;

use tracing::info;

use super::config::ensure_parent_dir;
use super::error::CoreResult;
use crate::game::codec;
use crate::game::engine::{ChessService, Game};

/// Read a saved game, `None` when the file does not exist
pub fn load_game(path: &Path) -> CoreResult<Option<Game>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let game = codec::decode_game(&contents)?;
    info!("[CONFIG] Restored game '{}' from {:?}", game.name, path);
    Ok(Some(game))
}

/// Write the service's current game to `path`
pub fn save_game(service: &ChessService, path: &Path) -> CoreResult<()> {
    ensure_parent_dir(path)?;
    let json = codec::encode_game_pretty(service.game_state())?;
    fs::write(path, json)?;
    Ok(())
}
