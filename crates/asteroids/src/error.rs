//! Game errors
//!
//! Only startup can fail. Once the loop is running every fault is logged
//! and skipped.

use arcade_engine::config::ConfigError;
use arcade_engine::EngineError;
use thiserror::Error;

/// Game-level errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Engine error
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Audio setup error
    #[error("Audio error: {0}")]
    Audio(String),
}
