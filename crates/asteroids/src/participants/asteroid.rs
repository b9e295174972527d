//! Asteroids
//!
//! Four hand-drawn outline variants, scaled by size class. A destroyed
//! asteroid splits into two of the next size down until the smallest size,
//! which just disappears.

use std::f32::consts::TAU;

use arcade_engine::foundation::math::Pose;
use arcade_engine::physics::Outline;
use rand::Rng;

use super::{Contact, EntitySpawner, Kind, Notice, Participant};
use crate::sound::Sound;

/// Outline variants at size-1 scale
pub const VARIANTS: [&[(f32, f32)]; 4] = [
    &[
        (0.0, -30.0),
        (28.0, -15.0),
        (20.0, 20.0),
        (4.0, 8.0),
        (-1.0, 30.0),
        (-12.0, 15.0),
        (-5.0, 2.0),
        (-25.0, 7.0),
        (-10.0, -25.0),
    ],
    &[
        (10.0, -28.0),
        (7.0, -16.0),
        (30.0, -9.0),
        (30.0, 9.0),
        (10.0, 13.0),
        (5.0, 30.0),
        (-8.0, 28.0),
        (-6.0, 6.0),
        (-27.0, 12.0),
        (-30.0, -11.0),
        (-20.0, -24.0),
    ],
    &[
        (10.0, -30.0),
        (30.0, 0.0),
        (15.0, 30.0),
        (0.0, 15.0),
        (-15.0, 30.0),
        (-30.0, 0.0),
        (-10.0, -30.0),
    ],
    &[
        (30.0, -18.0),
        (5.0, 5.0),
        (30.0, 15.0),
        (15.0, 30.0),
        (0.0, 25.0),
        (-15.0, 30.0),
        (-25.0, 8.0),
        (-10.0, -25.0),
        (0.0, -30.0),
        (10.0, -30.0),
    ],
];

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    /// Size 0
    Small,
    /// Size 1
    Medium,
    /// Size 2
    Large,
}

impl AsteroidSize {
    /// Numeric size class (0, 1 or 2)
    pub fn class(self) -> u8 {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
        }
    }

    /// Outline scale relative to the variant tables
    pub fn scale(self) -> f32 {
        match self {
            Self::Small => 0.5,
            Self::Medium => 1.0,
            Self::Large => 2.0,
        }
    }

    /// Points for destroying an asteroid of this size
    pub fn score(self) -> u32 {
        match self {
            Self::Small => 100,
            Self::Medium => 50,
            Self::Large => 20,
        }
    }

    /// Size of the two fragments, `None` for the smallest size
    pub fn fragment(self) -> Option<Self> {
        match self {
            Self::Small => None,
            Self::Medium => Some(Self::Small),
            Self::Large => Some(Self::Medium),
        }
    }

    /// Upper bound on the speed of a fragment of this size
    pub fn max_speed(self) -> f32 {
        match self {
            Self::Small => 7.0,
            Self::Medium => 5.0,
            Self::Large => 3.0,
        }
    }

    /// Explosion sound
    pub fn sound(self) -> Sound {
        match self {
            Self::Small => Sound::BangSmall,
            Self::Medium => Sound::BangMedium,
            Self::Large => Sound::BangLarge,
        }
    }
}

/// An asteroid at `(x, y)` moving at `speed` in direction `direction`
pub fn new(variant: usize, size: AsteroidSize, x: f32, y: f32, speed: f32, direction: f32) -> Participant {
    let variant = variant % VARIANTS.len();
    let outline = Outline::polygon(VARIANTS[variant]).scaled(size.scale());
    Participant::new(
        Kind::Asteroid { size, variant },
        Pose::at(x, y, 0.0).moving(speed, direction),
        outline,
    )
}

/// An asteroid with a random variant and direction
pub fn random(rng: &mut impl Rng, size: AsteroidSize, x: f32, y: f32, speed: f32) -> Participant {
    new(rng.gen_range(0..VARIANTS.len()), size, x, y, speed, rng.gen_range(0.0..TAU))
}

/// Other asteroids pass through; anything that destroys ships or asteroids
/// breaks it up.
pub(super) fn collided_with(
    asteroid: &mut Participant,
    size: AsteroidSize,
    variant: usize,
    other: &Contact,
    spawner: &mut dyn EntitySpawner,
) {
    if other.kind.is_asteroid() || !other.is_destroyer() {
        return;
    }
    asteroid.expired = true;

    if let Some(fragment) = size.fragment() {
        let position = asteroid.pose.position;
        let max_speed = fragment.max_speed();
        for _ in 0..2 {
            let rng = spawner.rng();
            let speed = rng.gen_range(1.0..=max_speed);
            let direction = rng.gen_range(0.0..TAU);
            spawner.spawn(new(variant, fragment, position.x, position.y, speed, direction));
        }
    }
    log::debug!("asteroid of size {} destroyed by {:?}", size.class(), other.kind);
    spawner.notify(Notice::AsteroidDestroyed(size));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participants::spawner::tests::{ids, TestSpawner};
    use crate::participants::Capabilities;
    use arcade_engine::ecs::Entity;
    use arcade_engine::foundation::math::Point2;

    fn bullet_contact() -> Contact {
        Contact {
            id: ids(1)[0],
            kind: Kind::Bullet,
            capabilities: Capabilities::ASTEROID_DESTROYER,
            position: Point2::origin(),
        }
    }

    fn fragments(size: AsteroidSize) -> (Vec<AsteroidSize>, Vec<Notice>) {
        let mut spawner = TestSpawner::new();
        let mut rock = new(1, size, 100.0, 100.0, 3.0, 0.0);
        rock.collided_with(ids(1)[0], &bullet_contact(), &mut spawner);
        assert!(rock.is_expired());

        let sizes = spawner
            .effects
            .spawned
            .iter()
            .map(|p| match p.kind() {
                Kind::Asteroid { size, variant } => {
                    assert_eq!(variant, 1);
                    size
                }
                other => panic!("unexpected fragment {other:?}"),
            })
            .collect();
        (sizes, spawner.effects.notices)
    }

    #[test]
    fn test_split_law() {
        let (sizes, notices) = fragments(AsteroidSize::Large);
        assert_eq!(sizes, vec![AsteroidSize::Medium, AsteroidSize::Medium]);
        assert_eq!(notices, vec![Notice::AsteroidDestroyed(AsteroidSize::Large)]);

        let (sizes, _) = fragments(AsteroidSize::Medium);
        assert_eq!(sizes, vec![AsteroidSize::Small, AsteroidSize::Small]);

        let (sizes, notices) = fragments(AsteroidSize::Small);
        assert!(sizes.is_empty());
        assert_eq!(notices, vec![Notice::AsteroidDestroyed(AsteroidSize::Small)]);
    }

    #[test]
    fn test_fragment_speed_bounded() {
        let mut spawner = TestSpawner::new();
        for _ in 0..20 {
            let mut rock = new(0, AsteroidSize::Medium, 0.0, 0.0, 3.0, 0.0);
            rock.collided_with(ids(1)[0], &bullet_contact(), &mut spawner);
        }
        for fragment in &spawner.effects.spawned {
            let speed = fragment.pose().speed;
            assert!((1.0..=7.0).contains(&speed), "speed {speed}");
        }
    }

    #[test]
    fn test_asteroids_pass_through_each_other() {
        let mut spawner = TestSpawner::new();
        let mut rock = new(0, AsteroidSize::Large, 0.0, 0.0, 3.0, 0.0);
        let other = new(2, AsteroidSize::Large, 0.0, 0.0, 3.0, 0.0);
        rock.collided_with(ids(1)[0], &other.contact(ids(1)[0]), &mut spawner);
        assert!(!rock.is_expired());
        assert!(spawner.effects.is_empty());
    }

    #[test]
    fn test_scores() {
        assert_eq!(AsteroidSize::Large.score(), 20);
        assert_eq!(AsteroidSize::Medium.score(), 50);
        assert_eq!(AsteroidSize::Small.score(), 100);
    }
}
