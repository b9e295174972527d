//! Headless Asteroids
//!
//! Runs the simulation with a scripted pilot, logging the HUD as it
//! changes. Reads `asteroids.toml` from the working directory if present;
//! `RUST_LOG` controls verbosity.

use arcade_engine::config::Config;
use arcade_engine::foundation::logging;
use arcade_engine::foundation::time::SystemClock;
use arcade_engine::{Engine, EngineConfig};

use asteroids::app::{demo_script, GameApp};
use asteroids::render::LogRenderer;
use asteroids::sound::{ClipSink, LogSink, NullSink, SoundSink};
use asteroids::{Controller, GameConfig, GameError};

const CONFIG_PATH: &str = "asteroids.toml";

fn sound_sink(config: &GameConfig) -> Box<dyn SoundSink + Send> {
    if !config.audio.enabled {
        return Box::new(NullSink);
    }
    match ClipSink::open(&config.audio.clip_dir) {
        Ok(sink) => Box::new(sink),
        Err(e) => {
            log::warn!("{e}; sounds will only be logged");
            Box::new(LogSink)
        }
    }
}

fn main() -> Result<(), GameError> {
    logging::init("info");
    log::info!("Starting headless Asteroids");

    let config = GameConfig::load_or_default(CONFIG_PATH);
    let engine_config = EngineConfig {
        tick_interval_ms: config.run.tick_interval_ms,
        max_ticks: config.run.max_ticks,
    };

    let sound = sound_sink(&config);
    let controller = Controller::new(config, sound);
    let mut app = GameApp::new(controller, Box::new(LogRenderer::new())).with_script(demo_script);

    Engine::run(engine_config, Box::new(SystemClock::new()), &mut app)?;
    Ok(())
}
