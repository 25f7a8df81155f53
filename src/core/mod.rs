//! Core module - configuration and file persistence
//!
//! Everything that touches the filesystem lives here; the `game` module stays
//! pure.
//!
//! - [`EngineConfig`] - User settings, loaded from `config.json`
//! - [`persistence`] - Saving and restoring a running game
//! - [`CoreError`] - Errors for both

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{config_path, load_config, save_config, EngineConfig};
pub use error::{CoreError, CoreResult};
