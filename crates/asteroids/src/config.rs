//! Game configuration
//!
//! Every gameplay constant lives here so a `asteroids.toml` (or `.ron`) file
//! can override it. Missing keys keep their defaults.

use std::f32::consts::PI;
use std::path::PathBuf;

use arcade_engine::config::{Config, Deserialize, Serialize};
use arcade_engine::foundation::time::Millis;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Audio settings
    pub audio: AudioConfig,

    /// Loop and randomness settings
    pub run: RunConfig,
}

impl Config for GameConfig {}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Width and height of the square field
    pub field_size: f32,

    /// Pause before a transition takes effect (ms)
    pub end_delay_ms: Millis,

    /// Lives at the start of a game
    pub starting_lives: u32,

    /// Maximum player bullets in flight
    pub bullet_limit: usize,

    /// Bullet speed (units per tick)
    pub bullet_speed: f32,

    /// Player bullet lifetime (ms)
    pub bullet_lifetime_ms: Millis,

    /// Alien bullet lifetime (ms)
    pub alien_bullet_lifetime_ms: Millis,

    /// Multiplicative ship speed decay per tick
    pub ship_friction: f32,

    /// Ship acceleration per tick of thrust
    pub ship_acceleration: f32,

    /// Ship turn per tick (radians)
    pub ship_turn: f32,

    /// Speed of the asteroids placed at level start
    pub asteroid_speed: f32,

    /// Alien cruising speed
    pub alien_speed: f32,

    /// Period of the ship's automatic acceleration bursts (ms)
    pub burst_period_ms: Millis,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            field_size: 750.0,
            end_delay_ms: 2500,
            starting_lives: 3,
            bullet_limit: 8,
            bullet_speed: 15.0,
            bullet_lifetime_ms: 1000,
            alien_bullet_lifetime_ms: 1500,
            ship_friction: 0.995,
            ship_acceleration: 0.4,
            ship_turn: PI / 16.0,
            asteroid_speed: 3.0,
            alien_speed: 3.0,
            burst_period_ms: 200,
        }
    }
}

/// Audio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Play sounds at all
    pub enabled: bool,

    /// Directory holding `<name>.wav` clips
    pub clip_dir: PathBuf,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            clip_dir: PathBuf::from("sounds"),
        }
    }
}

/// Loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Fixed tick interval (ms)
    pub tick_interval_ms: Millis,

    /// RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,

    /// Stop the headless run after this many ticks
    pub max_ticks: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 20,
            seed: None,
            max_ticks: Some(3000),
        }
    }
}
