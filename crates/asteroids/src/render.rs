//! Frames handed to the renderer
//!
//! The controller produces one [`Frame`] per tick: world-space outlines of
//! every visible participant plus the legend and the HUD numbers. Drawing
//! them is up to the host's [`Renderer`].

use arcade_engine::foundation::math::Point2;

use crate::controller::Phase;
use crate::participants::Kind;

/// One outline to draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    /// What is being drawn
    pub kind: Kind,
    /// World-space outline vertices
    pub points: Vec<Point2>,
    /// Join the last vertex back to the first
    pub closed: bool,
    /// Ship exhaust flame, when lit
    pub flame: Option<Vec<Point2>>,
}

/// Numbers shown around the playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    /// Current score
    pub score: u32,
    /// Lives left
    pub lives: u32,
    /// Current level
    pub level: u32,
    /// Game phase
    pub phase: Phase,
}

/// Snapshot of everything visible this tick
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Visible participants
    pub items: Vec<DrawItem>,
    /// Centre-screen message, empty when none
    pub legend: String,
    /// HUD numbers
    pub hud: Hud,
}

impl Frame {
    /// Number of items of the given kind
    pub fn count(&self, matches: impl Fn(&Kind) -> bool) -> usize {
        self.items.iter().filter(|item| matches(&item.kind)).count()
    }
}

/// Consumer of frames
pub trait Renderer {
    /// Draw one frame. Called once per tick.
    fn draw(&mut self, frame: &Frame);
}

/// Renderer for headless runs: logs HUD changes and legend changes
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_hud: Option<Hud>,
    last_legend: String,
    frames: u64,
}

impl LogRenderer {
    /// Create a renderer that has seen no frames
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        if self.last_hud != Some(frame.hud) {
            log::info!(
                "score {} | lives {} | level {} | {:?}",
                frame.hud.score,
                frame.hud.lives,
                frame.hud.level,
                frame.hud.phase
            );
            self.last_hud = Some(frame.hud);
        }
        if self.last_legend != frame.legend {
            if !frame.legend.is_empty() {
                log::info!("legend: {}", frame.legend);
            }
            self.last_legend.clone_from(&frame.legend);
        }
        log::trace!("frame {}: {} items", self.frames, frame.items.len());
    }
}
