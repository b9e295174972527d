//! Core engine implementation
//!
//! The engine owns the clock and paces a fixed-interval tick loop. Each tick
//! runs `update` then `render` on the application. A tick that overruns its
//! slot is logged and the schedule restarts; the loop never tries to catch up.

use crate::{
    application::Application,
    config::Config,
    foundation::time::{Clock, Millis, TickPacer},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main engine struct
///
/// The engine coordinates the clock and manages the main loop.
pub struct Engine {
    clock: Box<dyn Clock>,

    pacer: TickPacer,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig, clock: Box<dyn Clock>) -> Result<Self, EngineError> {
        if config.tick_interval_ms == 0 {
            return Err(EngineError::InitializationFailed(
                "tick interval must be at least 1 ms".to_string(),
            ));
        }
        log::info!("Initializing engine ({} ms ticks)", config.tick_interval_ms);

        let pacer = TickPacer::new(config.tick_interval_ms, clock.now_ms());
        Ok(Self {
            clock,
            pacer,
            config,
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(
        config: EngineConfig,
        clock: Box<dyn Clock>,
        app: &mut T,
    ) -> Result<(), EngineError> {
        let mut engine = Self::new(config, clock)?;

        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");
        let result = engine.main_loop(app);

        // Cleanup
        app.cleanup(&mut engine);

        log::info!(
            "Engine shutdown complete after {} ticks ({} overruns)",
            engine.pacer.ticks(),
            engine.pacer.overruns()
        );
        result
    }

    fn main_loop<T: Application>(&mut self, app: &mut T) -> Result<(), EngineError> {
        while self.running {
            let wait = self.pacer.wait_time(self.clock.now_ms());
            if !wait.is_zero() {
                self.clock.sleep(wait);
            }

            let now = self.clock.now_ms();
            app.update(self, now)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;
            app.render(self)
                .map_err(|e| EngineError::ApplicationError(format!("App render: {e}")))?;

            let finished = self.clock.now_ms();
            if self.pacer.complete(finished) {
                log::warn!(
                    "tick {} overran its {} ms slot (finished at {} ms)",
                    self.pacer.ticks(),
                    self.pacer.interval(),
                    finished
                );
            }

            if self.config.max_ticks.is_some_and(|max| self.pacer.ticks() >= max) {
                log::debug!("tick budget of {} reached", self.pacer.ticks());
                self.running = false;
            }
        }
        Ok(())
    }

    /// Request that the loop stops after the current tick
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Whether the loop is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current clock time
    pub fn now(&self) -> Millis {
        self.clock.now_ms()
    }

    /// Number of completed ticks
    pub fn tick_count(&self) -> u64 {
        self.pacer.ticks()
    }

    /// Number of ticks that missed their deadline
    pub fn overrun_count(&self) -> u64 {
        self.pacer.overruns()
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed tick interval in milliseconds
    pub tick_interval_ms: Millis,

    /// Stop after this many ticks (`None` runs until the application quits)
    pub max_ticks: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 20,
            max_ticks: None,
        }
    }
}

impl Config for EngineConfig {}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;
    use crate::foundation::time::ManualClock;

    struct Recorder {
        clock: ManualClock,
        work_ms: Millis,
        updates: Vec<Millis>,
        renders: usize,
        quit_after: Option<usize>,
        cleaned_up: bool,
    }

    impl Recorder {
        fn new(clock: &ManualClock) -> Self {
            Self {
                clock: clock.clone(),
                work_ms: 0,
                updates: Vec::new(),
                renders: 0,
                quit_after: None,
                cleaned_up: false,
            }
        }
    }

    impl Application for Recorder {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, now: Millis) -> Result<(), AppError> {
            self.updates.push(now);
            self.clock.advance(self.work_ms);
            if self.quit_after == Some(self.updates.len()) {
                engine.quit();
            }
            Ok(())
        }

        fn render(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            self.renders += 1;
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {
            self.cleaned_up = true;
        }
    }

    fn config(max_ticks: u64) -> EngineConfig {
        EngineConfig {
            tick_interval_ms: 20,
            max_ticks: Some(max_ticks),
        }
    }

    #[test]
    fn test_fixed_interval_ticks() {
        let clock = ManualClock::new();
        let mut app = Recorder::new(&clock);
        app.work_ms = 5;

        Engine::run(config(4), Box::new(clock.clone()), &mut app).unwrap();

        assert_eq!(app.updates, vec![0, 20, 40, 60]);
        assert_eq!(app.renders, 4);
        assert!(app.cleaned_up);
    }

    #[test]
    fn test_overrun_restarts_schedule() {
        let clock = ManualClock::new();
        let mut app = Recorder::new(&clock);
        app.work_ms = 30;

        Engine::run(config(3), Box::new(clock.clone()), &mut app).unwrap();

        // Every tick overruns, so the next one starts immediately
        assert_eq!(app.updates, vec![0, 30, 60]);
    }

    #[test]
    fn test_application_can_quit() {
        let clock = ManualClock::new();
        let mut app = Recorder::new(&clock);
        app.quit_after = Some(2);

        let config = EngineConfig::default();
        Engine::run(config, Box::new(clock), &mut app).unwrap();
        assert_eq!(app.updates.len(), 2);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = EngineConfig {
            tick_interval_ms: 0,
            max_ticks: None,
        };
        assert!(matches!(
            Engine::new(config, Box::new(ManualClock::new())),
            Err(EngineError::InitializationFailed(_))
        ));
    }
}
