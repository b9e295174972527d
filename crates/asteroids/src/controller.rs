//! Game controller
//!
//! Owns the registry, the countdown scheduler and every counter, and runs
//! the level/life state machine. One call to [`Controller::tick`] is one
//! simulation step:
//!
//! 1. drop participants expired last tick
//! 2. perform a due transition
//! 3. deliver due countdowns
//! 4. apply player input to the ship
//! 5. move and wrap everything
//! 6. collision sweep
//! 7. build the frame
//!
//! Everything a step triggers becomes visible in the next one.

use std::f32::consts::FRAC_PI_2;

use arcade_engine::ecs::{Entity, EntityId, EntityRegistry};
use arcade_engine::events::CountdownScheduler;
use arcade_engine::foundation::math::{Field, Point2};
use arcade_engine::foundation::time::Millis;
use arcade_engine::physics::CollisionSystem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision;
use crate::config::GameConfig;
use crate::input::InputSource;
use crate::participants::{
    alien, asteroid, bullet, ship, AlienSize, AsteroidSize, Cue, Effects, Kind, Notice, Participant, Shooter,
    SpawnBuffer,
};
use crate::render::{DrawItem, Frame, Hud};
use crate::sound::{Sound, SoundSink};

/// Legend on the splash screen
pub const TITLE: &str = "Asteroids";
/// Legend after losing a ship
pub const OUCH: &str = "Ouch!";
/// Legend once the last life is gone
pub const GAME_OVER: &str = "Game Over";

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen with drifting asteroids, input ignored
    Splash,
    /// Game in progress
    Playing,
    /// Game in progress with a transition scheduled
    TransitionPending,
    /// Out of lives, input ignored until the next start
    GameOver,
}

impl Phase {
    /// A game is in progress
    pub fn in_game(self) -> bool {
        matches!(self, Self::Playing | Self::TransitionPending)
    }
}

/// Controls a game of Asteroids
pub struct Controller {
    config: GameConfig,
    field: Field,
    registry: EntityRegistry<Participant>,
    scheduler: CountdownScheduler<Cue>,
    collisions: CollisionSystem,
    rng: StdRng,
    sound: Box<dyn SoundSink + Send>,

    /// The ship, if one is in play
    ship: Option<EntityId>,
    phase: Phase,
    accept_input: bool,
    transition_at: Option<Millis>,

    lives: u32,
    level: u32,
    score: u32,
    player_bullets: usize,
    alien_bullets: usize,

    legend: String,
    now: Millis,
    frame: Frame,
}

impl Controller {
    /// Create a controller showing the splash screen
    pub fn new(config: GameConfig, sound: Box<dyn SoundSink + Send>) -> Self {
        let rng = match config.run.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let field = Field::square(config.gameplay.field_size);
        let hud = Hud {
            score: 0,
            lives: config.gameplay.starting_lives,
            level: 1,
            phase: Phase::Splash,
        };

        let mut controller = Self {
            field,
            registry: EntityRegistry::new(),
            scheduler: CountdownScheduler::new(),
            collisions: CollisionSystem::new(),
            rng,
            sound,
            ship: None,
            phase: Phase::Splash,
            accept_input: false,
            transition_at: None,
            lives: config.gameplay.starting_lives,
            level: 1,
            score: 0,
            player_bullets: 0,
            alien_bullets: 0,
            legend: String::new(),
            now: 0,
            frame: Frame {
                items: Vec::new(),
                legend: String::new(),
                hud,
            },
            config,
        };
        controller.splash_screen();
        controller
    }

    /// Start a new game, whatever is going on
    pub fn start(&mut self, now: Millis) {
        self.now = now;
        self.clear();
        self.level = 1;
        self.score = 0;
        self.lives = self.config.gameplay.starting_lives;
        self.transition_at = None;

        self.place_asteroids();
        self.place_ship();
        self.stage_alien();

        self.accept_input = true;
        self.set_phase(Phase::Playing);
        log::info!("new game started with {} lives", self.lives);
    }

    /// Run one simulation step at time `now` and return the resulting frame
    pub fn tick(&mut self, now: Millis, input: &dyn InputSource) -> &Frame {
        self.now = now;

        let removed = self.registry.compact();
        if removed > 0 {
            log::trace!("compacted {removed} expired participants");
        }

        self.perform_transition();
        self.poll_countdowns();
        self.apply_input(input);
        self.registry.advance_all(&self.field);
        self.sweep();

        self.frame = self.build_frame();
        &self.frame
    }

    /// Add a participant, scheduling its lifetime and counting bullets
    pub fn add_participant(&mut self, participant: Participant) -> EntityId {
        let kind = participant.kind();
        let lifetime = participant.lifetime();
        let id = self.registry.add(participant);

        if let Some(lifetime) = lifetime {
            self.scheduler.schedule(id, Cue::Expire, self.now, lifetime);
        }
        match kind {
            Kind::Bullet => self.player_bullets += 1,
            Kind::AlienBullet => self.alien_bullets += 1,
            _ => {}
        }
        id
    }

    /// Take a participant out of play without scoring or costing a life.
    ///
    /// Expiring the ship drops the ship handle and expiring a bullet frees
    /// its slot.
    pub fn expire(&mut self, id: EntityId) -> bool {
        let Some(kind) = self.registry.get(id).filter(|p| !p.is_expired()).map(Participant::kind) else {
            return false;
        };
        self.registry.expire(id);
        if self.ship == Some(id) {
            self.ship = None;
        }
        match kind {
            Kind::Bullet => self.player_bullets = self.player_bullets.saturating_sub(1),
            Kind::AlienBullet => self.alien_bullets = self.alien_bullets.saturating_sub(1),
            _ => {}
        }
        true
    }

    /// Schedule a countdown for `owner`
    pub fn schedule(&mut self, owner: EntityId, delay: Millis, cue: Cue) {
        self.scheduler.schedule(owner, cue, self.now, delay);
    }

    fn splash_screen(&mut self) {
        self.clear();
        self.legend = TITLE.to_string();
        self.place_asteroids();
        self.accept_input = false;
        self.set_phase(Phase::Splash);
        self.frame = self.build_frame();
    }

    fn final_screen(&mut self) {
        self.legend = GAME_OVER.to_string();
        self.accept_input = false;
        self.set_phase(Phase::GameOver);
        log::info!("game over: score {} at level {}", self.score, self.level);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn clear(&mut self) {
        self.registry.clear();
        self.scheduler.clear();
        self.legend.clear();
        self.ship = None;
        self.player_bullets = 0;
        self.alien_bullets = 0;
    }

    fn next_level(&mut self) {
        self.clear();
        self.level += 1;
        if self.lives > 0 {
            self.place_ship();
        }
        self.place_asteroids();
        self.stage_alien();
        log::info!("level {} begins", self.level);
    }

    /// A new ship in the centre, pointing up. Any existing ship is removed.
    fn place_ship(&mut self) {
        if let Some(old) = self.ship.take() {
            self.registry.expire(old);
        }
        let center = self.field.center();
        let ship = ship::new(center.x, center.y, -FRAC_PI_2, &self.config.gameplay);
        self.ship = Some(self.add_participant(ship));
        self.legend.clear();
    }

    /// `level + 3` large asteroids near the corners, alternating between them
    fn place_asteroids(&mut self) {
        let speed = self.config.gameplay.asteroid_speed;
        for i in 0..self.level + 3 {
            let x = if i % 2 == 0 { 150.0 } else { 600.0 };
            let y = if i % 4 < 2 { 600.0 } else { 150.0 };
            let rock = asteroid::random(&mut self.rng, AsteroidSize::Large, x, y, speed);
            self.add_participant(rock);
        }
    }

    /// From level 2 on, park an inert alien that appears after a delay
    fn stage_alien(&mut self) {
        if self.level < 2 {
            return;
        }
        let size = if self.level == 2 { AlienSize::Large } else { AlienSize::Small };
        let id = self.add_participant(alien::new(size, &self.config.gameplay));
        let delay = self.rng.gen_range(alien::APPEAR_DELAY);
        self.scheduler.schedule(id, Cue::Appear, self.now, delay);
        log::debug!("{size:?} alien staged, appearing in {delay} ms");
    }

    fn schedule_transition(&mut self) {
        self.transition_at = Some(self.now + self.config.gameplay.end_delay_ms);
        self.set_phase(Phase::TransitionPending);
    }

    fn perform_transition(&mut self) {
        match self.transition_at {
            Some(at) if at <= self.now => self.transition_at = None,
            _ => return,
        }

        if self.lives == 0 {
            self.final_screen();
            return;
        }
        self.set_phase(Phase::Playing);
        if self.ship.is_none() {
            self.place_ship();
        }
    }

    fn poll_countdowns(&mut self) {
        let due = self.scheduler.poll(self.now);
        if due.is_empty() {
            return;
        }

        let ship_position = self.ship_position();
        let mut buffer = SpawnBuffer::new(&mut self.rng, &self.config.gameplay, ship_position);
        for countdown in due {
            match self.registry.get_mut(countdown.owner) {
                Some(owner) if !owner.is_expired() => {
                    log::debug!("countdown {:?} fired", countdown.payload);
                    owner.on_countdown(countdown.owner, countdown.payload, &mut buffer);
                }
                _ => log::trace!("countdown {:?} for a departed owner dropped", countdown.payload),
            }
        }
        let effects = buffer.into_effects();
        self.apply(effects);
    }

    fn apply_input(&mut self, input: &dyn InputSource) {
        if !self.accept_input {
            return;
        }
        let Some(id) = self.ship else {
            return;
        };
        let gameplay = &self.config.gameplay;
        let Some(ship) = self.registry.get_mut(id).filter(|ship| !ship.is_expired()) else {
            return;
        };

        let thrusting = input.thrust();
        if thrusting {
            ship.thrust(gameplay.ship_acceleration);
        } else {
            ship.set_flame(false);
        }
        match (input.turn_left(), input.turn_right()) {
            (true, false) => ship.turn(-gameplay.ship_turn),
            (false, true) => ship.turn(gameplay.ship_turn),
            _ => {}
        }

        let shot = (input.fire() && self.player_bullets < gameplay.bullet_limit).then(|| {
            bullet::player(
                ship.nose(),
                gameplay.bullet_speed,
                ship.pose().heading,
                gameplay.bullet_lifetime_ms,
            )
        });

        if thrusting {
            self.sound.play(Sound::Thrust);
        }
        if let Some(shot) = shot {
            self.add_participant(shot);
            self.sound.play(Sound::Fire);
        }
    }

    fn sweep(&mut self) {
        let ship_position = self.ship_position();
        let mut buffer = SpawnBuffer::new(&mut self.rng, &self.config.gameplay, ship_position);
        self.collisions
            .sweep(&mut self.registry, |registry, pair| collision::resolve(registry, pair, &mut buffer));
        let effects = buffer.into_effects();
        self.apply(effects);
    }

    /// Spawns first, then countdowns, then notices: a notice may start a new
    /// level, which must also sweep away what this batch spawned.
    ///
    /// Ship losses are handled ahead of the other notices so a level change
    /// in the same batch cannot replace the ship before its loss is counted.
    fn apply(&mut self, mut effects: Effects) {
        for participant in effects.spawned {
            self.add_participant(participant);
        }
        for (owner, delay, cue) in effects.scheduled {
            self.scheduler.schedule(owner, cue, self.now, delay);
        }
        effects
            .notices
            .sort_by_key(|notice| !matches!(notice, Notice::ShipDestroyed(_)));
        for notice in effects.notices {
            self.handle_notice(notice);
        }
    }

    fn handle_notice(&mut self, notice: Notice) {
        match notice {
            Notice::ShipDestroyed(id) => {
                if self.ship != Some(id) {
                    log::trace!("destroyed ship is not the current ship");
                    return;
                }
                self.sound.play(Sound::BangShip);
                self.ship = None;
                self.legend = OUCH.to_string();
                self.lives = self.lives.saturating_sub(1);
                log::info!("ship lost, {} lives left", self.lives);
                self.schedule_transition();
            }
            Notice::AsteroidDestroyed(size) => {
                self.sound.play(size.sound());
                if !self.phase.in_game() {
                    return;
                }
                self.score += size.score();
                if self.count_asteroids() == 0 {
                    self.schedule_transition();
                    self.next_level();
                }
            }
            Notice::AlienAppeared(size) => {
                log::debug!("{size:?} alien appeared");
                self.sound.play(size.sound());
            }
            Notice::AlienDestroyed(size) => {
                self.sound.play(Sound::BangAlienShip);
                if self.phase.in_game() {
                    self.score += size.score();
                    self.stage_alien();
                }
            }
            Notice::BulletRetired(Shooter::Player) => {
                self.player_bullets = self.player_bullets.saturating_sub(1);
            }
            Notice::BulletRetired(Shooter::Alien) => {
                self.alien_bullets = self.alien_bullets.saturating_sub(1);
            }
        }
    }

    fn count_asteroids(&self) -> usize {
        self.registry.iter_live().filter(|(_, p)| p.kind().is_asteroid()).count()
    }

    fn ship_position(&self) -> Option<Point2> {
        let id = self.ship?;
        self.registry
            .get(id)
            .filter(|ship| !ship.is_expired())
            .map(|ship| ship.pose().position)
    }

    fn build_frame(&self) -> Frame {
        let items = self
            .registry
            .iter_live()
            .filter(|(_, p)| !p.is_inert())
            .map(|(_, p)| {
                let shape = p.outline().to_world_space(p.pose());
                let flame = p
                    .flame_on()
                    .then(|| ship::flame_outline().to_world_space(p.pose()).points);
                DrawItem {
                    kind: p.kind(),
                    points: shape.points,
                    closed: shape.closed,
                    flame,
                }
            })
            .collect();

        Frame {
            items,
            legend: self.legend.clone(),
            hud: Hud {
                score: self.score,
                lives: self.lives,
                level: self.level,
                phase: self.phase,
            },
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Lives left
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Current level
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current legend, empty when none
    pub fn legend(&self) -> &str {
        &self.legend
    }

    /// Whether player input is being applied
    pub fn accepts_input(&self) -> bool {
        self.accept_input
    }

    /// Id of the ship in play
    pub fn ship_id(&self) -> Option<EntityId> {
        self.ship
    }

    /// Player bullets in flight
    pub fn player_bullets(&self) -> usize {
        self.player_bullets
    }

    /// Alien bullets in flight
    pub fn alien_bullets(&self) -> usize {
        self.alien_bullets
    }

    /// When the pending transition takes effect
    pub fn transition_at(&self) -> Option<Millis> {
        self.transition_at
    }

    /// Countdowns not yet delivered
    pub fn pending_countdowns(&self) -> usize {
        self.scheduler.pending()
    }

    /// Read-only view of every participant
    pub fn registry(&self) -> &EntityRegistry<Participant> {
        &self.registry
    }

    /// Live participants of the matching kinds
    pub fn count(&self, matches: impl Fn(&Kind) -> bool) -> usize {
        self.registry.iter_live().filter(|(_, p)| matches(&p.kind())).count()
    }

    /// Frame built by the last tick
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Game configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyStates;
    use crate::sound::NullSink;

    fn controller() -> Controller {
        let mut config = GameConfig::default();
        config.run.seed = Some(11);
        Controller::new(config, Box::new(NullSink))
    }

    fn rocks(controller: &Controller) -> Vec<Point2> {
        controller
            .registry()
            .iter_live()
            .filter(|(_, p)| p.kind().is_asteroid())
            .map(|(_, p)| p.pose().position)
            .collect()
    }

    #[test]
    fn test_splash_screen() {
        let controller = controller();
        assert_eq!(controller.phase(), Phase::Splash);
        assert_eq!(controller.legend(), TITLE);
        assert_eq!(controller.ship_id(), None);
        assert!(!controller.accepts_input());
        assert_eq!(rocks(&controller).len(), 4);
        assert_eq!(controller.frame().items.len(), 4);
    }

    #[test]
    fn test_corner_placement() {
        let controller = controller();
        let corners = rocks(&controller);
        for expected in [(150.0, 600.0), (600.0, 600.0), (150.0, 150.0), (600.0, 150.0)] {
            assert!(corners.contains(&Point2::new(expected.0, expected.1)), "missing {expected:?}");
        }
    }

    #[test]
    fn test_start_places_ship_and_resets_counters() {
        let mut controller = controller();
        controller.start(0);
        assert_eq!(controller.phase(), Phase::Playing);
        assert_eq!(controller.legend(), "");
        assert_eq!((controller.lives(), controller.level(), controller.score()), (3, 1, 0));
        assert!(controller.ship_id().is_some());
        assert!(controller.accepts_input());
        assert_eq!(rocks(&controller).len(), 4);
    }

    #[test]
    fn test_turning_both_ways_cancels() {
        let mut controller = controller();
        controller.start(0);
        for id in controller.registry().live_ids() {
            if Some(id) != controller.ship_id() {
                controller.expire(id);
            }
        }
        let ship = controller.ship_id().unwrap();
        let heading = controller.registry().get(ship).unwrap().pose().heading;

        let mut keys = KeyStates::new();
        keys.press(crate::input::Key::Left);
        keys.press(crate::input::Key::Right);
        controller.tick(20, &keys);

        let after = controller.registry().get(ship).unwrap().pose().heading;
        assert_eq!(heading, after);
    }

    #[test]
    fn test_flame_follows_thrust() {
        let mut controller = controller();
        controller.start(0);
        let ship = controller.ship_id().unwrap();

        let mut keys = KeyStates::new();
        keys.press(crate::input::Key::W);
        let frame = controller.tick(20, &keys);
        assert_eq!(frame.items.iter().filter(|item| item.flame.is_some()).count(), 1);

        keys.release_all();
        controller.tick(40, &keys);
        assert!(!controller.registry().get(ship).unwrap().flame_on());
    }
}
