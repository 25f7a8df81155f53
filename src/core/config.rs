//! Engine configuration
//!
//! Loads and saves [`EngineConfig`] as a JSON file.
//!
//! # File Location
//!
//! By default the config lives in `config.json` in the user's configuration
//! directory, e.g. `~/.config/fdchess/config.json` on Linux. When no such
//! directory can be determined the file is looked up in the current directory.
//!
//! # Error Handling
//!
//! Loading never fails: a missing file gives the defaults, an unreadable or
//! invalid one is logged and also gives the defaults. Saving reports errors
//! to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::CoreResult;

/// Config filename
const CONFIG_FILENAME: &str = "config.json";

/// User-facing engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Name given to new games
    pub game_name: String,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Where `play` keeps the running game between sessions
    pub state_file: Option<PathBuf>,
    /// Print the board after every accepted move
    pub show_board: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            game_name: String::from("Default Game"),
            log_filter: String::from("info"),
            state_file: None,
            show_board: true,
        }
    }
}

/// Resolve the default config file path
///
/// E.g. `~/.config/fdchess/config.json`. Falls back to a local `config.json`
/// if the system config dir cannot be found.
pub fn config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "fdchess", "fdchess") {
        proj_dirs.config_dir().join(CONFIG_FILENAME)
    } else {
        PathBuf::from(CONFIG_FILENAME)
    }
}

/// Load the config at `path`, falling back to defaults
pub fn load_config(path: &Path) -> EngineConfig {
    if !path.exists() {
        info!("[CONFIG] No config file found at {:?}. Using defaults.", path);
        return EngineConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<EngineConfig>(&contents) {
            Ok(config) => {
                info!("[CONFIG] Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "[CONFIG] Failed to parse config file at {:?}: {}. Using defaults.",
                    path, e
                );
                EngineConfig::default()
            }
        },
        Err(e) => {
            warn!(
                "[CONFIG] Failed to read config file at {:?}: {}. Using defaults.",
                path, e
            );
            EngineConfig::default()
        }
    }
}

/// Write `config` to `path` as pretty JSON, creating parent directories
pub fn save_config(config: &EngineConfig, path: &Path) -> CoreResult<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    info!("[CONFIG] Saved config to {:?}", path);
    Ok(())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
