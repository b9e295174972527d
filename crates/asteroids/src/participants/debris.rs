//! Wreckage: short line segments and specks that drift and fade

use std::f32::consts::TAU;

use arcade_engine::foundation::math::{Point2, Pose};
use arcade_engine::physics::Outline;
use rand::Rng;

use super::{Kind, Participant};

/// Debris appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebrisShape {
    /// Short line segment (open path, never collides)
    Line,
    /// Tiny speck
    Point,
}

/// A piece of debris at `at` with random spin, drift and lifetime
pub fn new(shape: DebrisShape, at: Point2, rng: &mut impl Rng) -> Participant {
    let (outline, heading) = match shape {
        DebrisShape::Line => {
            let length = rng.gen_range(10.0_f32..20.0).floor();
            (Outline::path(&[(0.0, 0.0), (0.0, length)]), rng.gen_range(0.0..TAU))
        }
        DebrisShape::Point => (Outline::circle(0.5), 0.0),
    };
    let speed = rng.gen_range(0.0..3.0);
    let direction = rng.gen_range(0.0..TAU);
    let lifetime = rng.gen_range(1000..3000);
    Participant::new(
        Kind::Debris(shape),
        Pose::at(at.x, at.y, heading).moving(speed, direction),
        outline,
    )
    .with_lifetime(lifetime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participants::spawner::tests::{ids, TestSpawner};
    use crate::participants::{Capabilities, Cue};
    use arcade_engine::ecs::Entity;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_debris_drifts_and_fades() {
        let mut rng = StdRng::seed_from_u64(3);
        for shape in [DebrisShape::Line, DebrisShape::Point] {
            let piece = new(shape, Point2::new(50.0, 50.0), &mut rng);
            assert!(piece.capabilities().is_empty());
            assert!(piece.pose().speed < 3.0);
            let lifetime = piece.lifetime().unwrap();
            assert!((1000..3000).contains(&lifetime));
        }
    }

    #[test]
    fn test_debris_ignores_collisions_and_expires_on_cue() {
        let id = ids(2);
        let mut spawner = TestSpawner::new();
        let mut piece = new(DebrisShape::Line, Point2::origin(), &mut spawner.rng);
        let ship = crate::participants::ship::new(0.0, 0.0, 0.0, &spawner.gameplay);

        piece.collided_with(id[0], &ship.contact(id[1]), &mut spawner);
        assert!(!piece.is_expired());
        assert!(ship.capabilities().contains(Capabilities::ASTEROID_DESTROYER));

        piece.on_countdown(id[0], Cue::Expire, &mut spawner);
        assert!(piece.is_expired());
        assert!(spawner.effects.is_empty());
    }
}
