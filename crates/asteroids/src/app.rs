//! Engine adapter
//!
//! [`GameApp`] plugs the [`Controller`] into the fixed-tick
//! [`Engine`](arcade_engine::Engine): every engine tick becomes one
//! controller tick followed by one draw.

use arcade_engine::foundation::time::Millis;
use arcade_engine::{AppError, Application, Engine};

use crate::controller::{Controller, Phase};
use crate::input::{Key, KeyStates};
use crate::render::Renderer;

/// Scripted key changes for a given tick number
pub type Script = fn(u64, &mut KeyStates);

/// Controller, input and renderer bundled as an engine application
pub struct GameApp {
    controller: Controller,
    keys: KeyStates,
    script: Option<Script>,
    renderer: Box<dyn Renderer>,
    ticks: u64,
    quit_on_game_over: bool,
}

impl GameApp {
    /// Create an application drawing through `renderer`
    pub fn new(controller: Controller, renderer: Box<dyn Renderer>) -> Self {
        Self {
            controller,
            keys: KeyStates::new(),
            script: None,
            renderer,
            ticks: 0,
            quit_on_game_over: true,
        }
    }

    /// Drive the keys from a script instead of a keyboard
    #[must_use]
    pub fn with_script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }

    /// Key state a host keyboard handler writes into
    pub fn keys_mut(&mut self) -> &mut KeyStates {
        &mut self.keys
    }

    /// The controller
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Application for GameApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        self.controller.start(engine.now());
        self.keys.release_all();
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, now: Millis) -> Result<(), AppError> {
        if let Some(script) = self.script {
            script(self.ticks, &mut self.keys);
        }
        self.controller.tick(now, &self.keys);
        self.ticks += 1;

        if self.quit_on_game_over && self.controller.phase() == Phase::GameOver {
            engine.quit();
        }
        Ok(())
    }

    fn render(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        self.renderer.draw(self.controller.frame());
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        log::info!(
            "final score {} at level {} with {} lives after {} ticks",
            self.controller.score(),
            self.controller.level(),
            self.controller.lives(),
            self.ticks
        );
    }
}

/// Demo pilot: spins slowly, fires in bursts and thrusts now and then
pub fn demo_script(tick: u64, keys: &mut KeyStates) {
    keys.release_all();
    if tick % 40 < 6 {
        keys.press(Key::Left);
    }
    if tick % 10 < 2 {
        keys.press(Key::Space);
    }
    if tick % 120 < 8 {
        keys.press(Key::Up);
    }
}
