//! Side effects of participant handlers
//!
//! A handler runs while its participant is borrowed out of the registry, so
//! it cannot touch the registry, the scheduler or the controller directly.
//! It records what it wants through [`EntitySpawner`] instead; the
//! controller applies the recorded [`Effects`] once the sweep or poll that
//! triggered them has finished.

use arcade_engine::ecs::EntityId;
use arcade_engine::foundation::math::Point2;
use arcade_engine::foundation::time::Millis;
use rand::rngs::StdRng;

use super::{Cue, Notice, Participant};
use crate::config::GameplayConfig;

/// What a handler may ask of the game
pub trait EntitySpawner {
    /// Add a participant from the next tick on
    fn spawn(&mut self, participant: Participant);

    /// Tell the controller something happened
    fn notify(&mut self, notice: Notice);

    /// Deliver `cue` to `owner` after `delay` milliseconds
    fn schedule(&mut self, owner: EntityId, delay: Millis, cue: Cue);

    /// Shared random source
    fn rng(&mut self) -> &mut StdRng;

    /// Where the player's ship is, if there is one
    fn ship_position(&self) -> Option<Point2>;

    /// Gameplay constants
    fn gameplay(&self) -> &GameplayConfig;
}

/// Recorded handler requests, in the order they were made
#[derive(Debug, Default)]
pub struct Effects {
    /// Participants to add
    pub spawned: Vec<Participant>,
    /// Countdowns to schedule as `(owner, delay, cue)`
    pub scheduled: Vec<(EntityId, Millis, Cue)>,
    /// Notices for the controller
    pub notices: Vec<Notice>,
}

impl Effects {
    /// Nothing was requested
    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty() && self.scheduled.is_empty() && self.notices.is_empty()
    }
}

/// [`EntitySpawner`] that buffers requests into [`Effects`]
pub struct SpawnBuffer<'a> {
    rng: &'a mut StdRng,
    gameplay: &'a GameplayConfig,
    ship_position: Option<Point2>,
    effects: Effects,
}

impl<'a> SpawnBuffer<'a> {
    /// Create an empty buffer
    pub fn new(rng: &'a mut StdRng, gameplay: &'a GameplayConfig, ship_position: Option<Point2>) -> Self {
        Self {
            rng,
            gameplay,
            ship_position,
            effects: Effects::default(),
        }
    }

    /// Requests recorded so far
    pub fn into_effects(self) -> Effects {
        self.effects
    }
}

impl EntitySpawner for SpawnBuffer<'_> {
    fn spawn(&mut self, participant: Participant) {
        self.effects.spawned.push(participant);
    }

    fn notify(&mut self, notice: Notice) {
        self.effects.notices.push(notice);
    }

    fn schedule(&mut self, owner: EntityId, delay: Millis, cue: Cue) {
        self.effects.scheduled.push((owner, delay, cue));
    }

    fn rng(&mut self) -> &mut StdRng {
        self.rng
    }

    fn ship_position(&self) -> Option<Point2> {
        self.ship_position
    }

    fn gameplay(&self) -> &GameplayConfig {
        self.gameplay
    }
}
