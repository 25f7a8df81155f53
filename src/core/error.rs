//! Error types for core module
//!
//! Provides custom error types for configuration and game-state file handling.

use thiserror::Error;

use crate::game::GameError;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Config or state file I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config serialization/deserialization error
    #[error("Config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// State file holds a game the engine rejects
    #[error("Saved game error: {0}")]
    Game(#[from] GameError),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
