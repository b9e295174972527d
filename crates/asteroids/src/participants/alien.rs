//! Alien saucers
//!
//! An alien is staged inert and brought into play by a chain of countdowns:
//! `Appear` picks an edge and activates it, `Move` sets it cruising, then
//! `Turn` and `Fire` keep rescheduling themselves until it is destroyed.

use std::f32::consts::{FRAC_PI_4, PI, TAU};

use arcade_engine::ecs::EntityId;
use arcade_engine::foundation::math::Pose;
use arcade_engine::foundation::time::Millis;
use arcade_engine::physics::Outline;
use rand::Rng;

use super::{bullet, debris, Contact, Cue, DebrisShape, EntitySpawner, Kind, Notice, Participant};
use crate::config::GameplayConfig;
use crate::sound::Sound;

/// Saucer outline at large scale
pub const HULL: [(f32, f32); 10] = [
    (20.0, 0.0),
    (12.0, 10.0),
    (9.0, 10.0),
    (7.0, 15.0),
    (-7.0, 15.0),
    (-9.0, 10.0),
    (-12.0, 10.0),
    (-20.0, 0.0),
    (-12.0, -10.0),
    (12.0, -10.0),
];

/// Delay before a staged alien appears (ms)
pub const APPEAR_DELAY: std::ops::RangeInclusive<Millis> = 5000..=10_000;

/// Interval between direction changes (ms)
pub const TURN_INTERVAL: std::ops::RangeInclusive<Millis> = 1000..=3000;

/// Interval between shots (ms)
pub const FIRE_INTERVAL: std::ops::RangeInclusive<Millis> = 1000..=2000;

/// Debris pieces of each shape left by a destroyed alien
const DEBRIS_PER_SHAPE: usize = 4;

/// Saucer size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlienSize {
    /// Big, slow-witted saucer that fires at random
    Large,
    /// Small saucer that aims at the ship
    Small,
}

impl AlienSize {
    /// Points for destroying it
    pub fn score(self) -> u32 {
        match self {
            Self::Large => 200,
            Self::Small => 1000,
        }
    }

    fn scale(self) -> f32 {
        match self {
            Self::Large => 1.0,
            Self::Small => 0.5,
        }
    }

    /// Sound played while it appears
    pub fn sound(self) -> Sound {
        match self {
            Self::Large => Sound::SaucerBig,
            Self::Small => Sound::SaucerSmall,
        }
    }
}

/// Edge a saucer entered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Entered at the left edge, cruises right
    Left,
    /// Entered at the right edge, cruises left
    Right,
}

impl Side {
    /// Direction of travel across the field
    pub fn cruise_direction(self) -> f32 {
        match self {
            Self::Left => 0.0,
            Self::Right => PI,
        }
    }
}

/// A staged (inert) saucer waiting for its `Appear` countdown
pub fn new(size: AlienSize, gameplay: &GameplayConfig) -> Participant {
    let mut saucer = Participant::new(
        Kind::Alien { size, side: Side::Left },
        Pose::at(0.0, gameplay.field_size / 2.0, PI),
        Outline::polygon(&HULL).scaled(size.scale()),
    );
    saucer.set_inert(true);
    saucer
}

pub(super) fn collided_with(
    saucer: &mut Participant,
    size: AlienSize,
    other: &Contact,
    spawner: &mut dyn EntitySpawner,
) {
    if !other.is_destroyer() || other.kind == Kind::AlienBullet {
        return;
    }
    let at = saucer.pose.position;
    for shape in [DebrisShape::Line, DebrisShape::Point] {
        for _ in 0..DEBRIS_PER_SHAPE {
            let piece = debris::new(shape, at, spawner.rng());
            spawner.spawn(piece);
        }
    }
    saucer.expired = true;
    log::debug!("{size:?} alien destroyed by {:?}", other.kind);
    spawner.notify(Notice::AlienDestroyed(size));
}

pub(super) fn on_countdown(saucer: &mut Participant, me: EntityId, cue: Cue, spawner: &mut dyn EntitySpawner) {
    let Kind::Alien { size, side } = saucer.kind else {
        return;
    };
    match cue {
        Cue::Appear => {
            let field = spawner.gameplay().field_size;
            let rng = spawner.rng();
            let side = if rng.gen_bool(0.5) { Side::Left } else { Side::Right };
            let y = rng.gen_range(0.0..field);
            let x = match side {
                Side::Left => 0.0,
                Side::Right => field - 1.0,
            };
            saucer.kind = Kind::Alien { size, side };
            saucer.pose = Pose::at(x, y, PI);
            saucer.set_inert(false);
            spawner.notify(Notice::AlienAppeared(size));
            spawner.schedule(me, 0, Cue::Move);
        }
        Cue::Move => {
            let speed = spawner.gameplay().alien_speed;
            saucer.pose.speed = speed;
            saucer.pose.direction = side.cruise_direction();
            let turn = spawner.rng().gen_range(TURN_INTERVAL);
            let fire = spawner.rng().gen_range(FIRE_INTERVAL);
            spawner.schedule(me, turn, Cue::Turn);
            spawner.schedule(me, fire, Cue::Fire);
        }
        Cue::Turn => {
            let rng = spawner.rng();
            let offset = [0.0, FRAC_PI_4, -FRAC_PI_4][rng.gen_range(0..3)];
            saucer.pose.direction = (side.cruise_direction() + offset).rem_euclid(TAU);
            let next = rng.gen_range(TURN_INTERVAL);
            spawner.schedule(me, next, Cue::Turn);
        }
        Cue::Fire => {
            let from = saucer.pose.position;
            let direction = match (size, spawner.ship_position()) {
                (AlienSize::Small, Some(ship)) => (ship.y - from.y).atan2(ship.x - from.x),
                _ => spawner.rng().gen_range(0.0..TAU),
            };
            let gameplay = spawner.gameplay();
            let shot = bullet::alien(from, gameplay.bullet_speed, direction, gameplay.alien_bullet_lifetime_ms);
            spawner.spawn(shot);
            let next = spawner.rng().gen_range(FIRE_INTERVAL);
            spawner.schedule(me, next, Cue::Fire);
        }
        Cue::Expire | Cue::Burst => log::trace!("alien ignores countdown {cue:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participants::spawner::tests::{ids, TestSpawner};
    use crate::participants::Capabilities;
    use approx::assert_relative_eq;
    use arcade_engine::ecs::Entity;
    use arcade_engine::foundation::math::Point2;

    #[test]
    fn test_staged_alien_is_inert_until_it_appears() {
        let id = ids(1)[0];
        let mut spawner = TestSpawner::new();
        let mut saucer = new(AlienSize::Large, &spawner.gameplay);
        assert!(saucer.is_inert());

        saucer.on_countdown(id, Cue::Appear, &mut spawner);
        assert!(!saucer.is_inert());
        assert_eq!(spawner.effects.notices, vec![Notice::AlienAppeared(AlienSize::Large)]);
        assert_eq!(spawner.effects.scheduled, vec![(id, 0, Cue::Move)]);
        let x = saucer.pose().position.x;
        assert!(x == 0.0 || x == spawner.gameplay.field_size - 1.0);
    }

    #[test]
    fn test_move_schedules_turn_and_fire() {
        let id = ids(1)[0];
        let mut spawner = TestSpawner::new();
        let mut saucer = new(AlienSize::Large, &spawner.gameplay);
        saucer.on_countdown(id, Cue::Appear, &mut spawner);
        spawner.effects = Default::default();

        saucer.on_countdown(id, Cue::Move, &mut spawner);
        assert_relative_eq!(saucer.pose().speed, spawner.gameplay.alien_speed);
        let cues: Vec<_> = spawner.effects.scheduled.iter().map(|&(_, delay, cue)| (cue, delay)).collect();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].0, Cue::Turn);
        assert!(TURN_INTERVAL.contains(&cues[0].1));
        assert_eq!(cues[1].0, Cue::Fire);
        assert!(FIRE_INTERVAL.contains(&cues[1].1));
    }

    #[test]
    fn test_small_alien_aims_at_ship() {
        let id = ids(1)[0];
        let mut spawner = TestSpawner::new();
        spawner.ship_position = Some(Point2::new(375.0, 100.0));
        let saucer_pose = Pose::at(375.0, 375.0, PI);
        let mut saucer = new(AlienSize::Small, &spawner.gameplay);
        saucer.set_inert(false);
        saucer.pose = saucer_pose;

        saucer.on_countdown(id, Cue::Fire, &mut spawner);
        let shot = &spawner.effects.spawned[0];
        assert_eq!(shot.kind(), Kind::AlienBullet);
        assert_relative_eq!(shot.pose().direction, -PI / 2.0, epsilon = 1e-5);
        assert_eq!(shot.lifetime(), Some(spawner.gameplay.alien_bullet_lifetime_ms));
    }

    #[test]
    fn test_destroyed_alien_leaves_debris() {
        let id = ids(2);
        let mut spawner = TestSpawner::new();
        let mut saucer = new(AlienSize::Small, &spawner.gameplay);
        let bullet = Contact {
            id: id[1],
            kind: Kind::Bullet,
            capabilities: Capabilities::ASTEROID_DESTROYER,
            position: Point2::origin(),
        };

        saucer.collided_with(id[0], &bullet, &mut spawner);
        assert!(saucer.is_expired());
        assert_eq!(spawner.effects.spawned.len(), 8);
        let lines = spawner
            .effects
            .spawned
            .iter()
            .filter(|p| p.kind() == Kind::Debris(DebrisShape::Line))
            .count();
        assert_eq!(lines, 4);
        assert_eq!(spawner.effects.notices, vec![Notice::AlienDestroyed(AlienSize::Small)]);
    }

    #[test]
    fn test_own_bullets_do_not_hurt() {
        let id = ids(2);
        let mut spawner = TestSpawner::new();
        let mut saucer = new(AlienSize::Large, &spawner.gameplay);
        let shot = bullet::alien(Point2::origin(), 15.0, 0.0, 1500);
        saucer.collided_with(id[0], &shot.contact(id[1]), &mut spawner);
        assert!(!saucer.is_expired());
    }
}
