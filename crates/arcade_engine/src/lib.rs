//! # Arcade Engine
//!
//! A small fixed-tick engine for 2D vector arcade games.
//!
//! ## Features
//!
//! - **Entity Registry**: Arena storage that tolerates add/expire during traversal
//! - **Outline Collision**: Area-overlap tests between rotated polygons and ellipses
//! - **Countdowns**: Owner-bound single-shot timers polled on the tick thread
//! - **Fixed-Tick Loop**: Deadline pacing with overrun logging
//! - **Configuration**: TOML/RON config files through one trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         // Initialize your game
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, now: Millis) -> Result<(), AppError> {
//!         // Advance game logic by one tick
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, engine: &mut Engine) {
//!         // Cleanup resources
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut app = MyApp;
//!     Engine::run(config, Box::new(SystemClock::new()), &mut app)?;
//!     Ok(())
//! }
//! ```

#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod ecs;
pub mod events;
pub mod foundation;
pub mod physics;

mod application;
mod engine;

pub use application::{AppError, Application};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        ecs::{Entity, EntityId, EntityRegistry},
        events::{Countdown, CountdownScheduler},
        foundation::{
            math::{Field, Point2, Pose, Vec2},
            time::{Clock, ManualClock, Millis, SystemClock},
        },
        physics::{CollisionPair, CollisionSystem, Outline, WorldSpaceShape},
        AppError, Application, Engine, EngineConfig, EngineError,
    };
}
