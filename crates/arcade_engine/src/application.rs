//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use crate::foundation::time::Millis;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a simulation with the fixed-tick [`Engine`].
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first tick. Use this to set up the initial
    /// game state.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Advance the application by one tick
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `now` - Clock time at the start of the tick, in milliseconds
    fn update(&mut self, engine: &mut Engine, now: Millis) -> Result<(), AppError>;

    /// Render the application
    ///
    /// Called after every update.
    fn render(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called once when the loop stops, whether or not it stopped cleanly.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}
