//! The player's ship

use arcade_engine::ecs::EntityId;
use arcade_engine::foundation::math::{Point2, Pose};
use arcade_engine::physics::Outline;

use super::{Contact, Cue, EntitySpawner, Kind, Notice, Participant};
use crate::config::GameplayConfig;

/// Hull outline, nose along +x
pub const HULL: [(f32, f32); 5] = [(21.0, 0.0), (-21.0, 12.0), (-14.0, 10.0), (-14.0, -10.0), (-21.0, -12.0)];

/// Exhaust flame outline
pub const FLAME: [(f32, f32); 3] = [(-14.0, 8.0), (-14.0, -8.0), (-30.0, 0.0)];

/// Where bullets leave the ship, in local coordinates
pub const NOSE: (f32, f32) = (20.0, 0.0);

/// A stationary ship at `(x, y)` pointing along `heading`
pub fn new(x: f32, y: f32, heading: f32, gameplay: &GameplayConfig) -> Participant {
    Participant::new(Kind::Ship { flame: false }, Pose::at(x, y, heading), Outline::polygon(&HULL))
        .with_friction(gameplay.ship_friction)
}

/// Flame outline in local space
pub fn flame_outline() -> Outline {
    Outline::polygon(&FLAME)
}

impl Participant {
    /// Thrust along the heading and light the flame
    pub fn thrust(&mut self, amount: f32) {
        self.pose.accelerate(amount);
        self.set_flame(true);
    }

    /// Show or hide the exhaust flame (ships only)
    pub fn set_flame(&mut self, on: bool) {
        if let Kind::Ship { flame } = &mut self.kind {
            *flame = on;
        }
    }

    /// Whether the exhaust flame is showing
    pub fn flame_on(&self) -> bool {
        matches!(self.kind, Kind::Ship { flame: true })
    }

    /// Turn by `delta` radians (positive turns right on screen)
    pub fn turn(&mut self, delta: f32) {
        self.pose.rotate(delta);
    }

    /// World position of the nose
    pub fn nose(&self) -> Point2 {
        self.pose.transform_point(&Point2::new(NOSE.0, NOSE.1))
    }
}

pub(super) fn collided_with(ship: &mut Participant, me: EntityId, other: &Contact, spawner: &mut dyn EntitySpawner) {
    if other.destroys_ships() {
        log::debug!("ship destroyed by {:?}", other.kind);
        ship.expired = true;
        spawner.notify(Notice::ShipDestroyed(me));
    }
}

/// One automatic acceleration burst, then another after the burst period
pub(super) fn burst(ship: &mut Participant, me: EntityId, spawner: &mut dyn EntitySpawner) {
    let gameplay = spawner.gameplay();
    let (amount, period) = (gameplay.ship_acceleration, gameplay.burst_period_ms);
    ship.thrust(amount);
    spawner.schedule(me, period, Cue::Burst);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participants::spawner::tests::{ids, TestSpawner};
    use crate::participants::{AsteroidSize, Capabilities, DebrisShape};
    use approx::assert_relative_eq;
    use arcade_engine::ecs::Entity;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_nose_follows_heading() {
        let ship = new(375.0, 375.0, -FRAC_PI_2, &GameplayConfig::default());
        let nose = ship.nose();
        assert_relative_eq!(nose.x, 375.0, epsilon = 1e-3);
        assert_relative_eq!(nose.y, 355.0, epsilon = 1e-3);
    }

    #[test]
    fn test_friction_applies_before_translation() {
        let gameplay = GameplayConfig::default();
        let mut ship = new(100.0, 100.0, 0.0, &gameplay);
        ship.thrust(1.0);
        assert!(ship.flame_on());
        ship.advance();
        assert_relative_eq!(ship.pose().position.x, 100.0 + gameplay.ship_friction, epsilon = 1e-4);
    }

    #[test]
    fn test_destroyed_only_by_ship_destroyers() {
        let id = ids(2);
        let mut spawner = TestSpawner::new();
        let mut ship = new(0.0, 0.0, 0.0, &spawner.gameplay);

        let debris = Contact {
            id: id[1],
            kind: Kind::Debris(DebrisShape::Point),
            capabilities: Capabilities::empty(),
            position: Point2::origin(),
        };
        ship.collided_with(id[0], &debris, &mut spawner);
        assert!(!ship.is_expired());

        let rock = Contact {
            kind: Kind::Asteroid { size: AsteroidSize::Small, variant: 0 },
            capabilities: Capabilities::SHIP_DESTROYER,
            ..debris
        };
        ship.collided_with(id[0], &rock, &mut spawner);
        assert!(ship.is_expired());
        assert_eq!(spawner.effects.notices, vec![Notice::ShipDestroyed(id[0])]);
    }

    #[test]
    fn test_burst_accelerates_and_reschedules() {
        let id = ids(1)[0];
        let mut spawner = TestSpawner::new();
        let mut ship = new(0.0, 0.0, 0.0, &spawner.gameplay);

        ship.on_countdown(id, Cue::Burst, &mut spawner);

        assert_relative_eq!(ship.pose().speed, spawner.gameplay.ship_acceleration, epsilon = 1e-5);
        assert!(ship.flame_on());
        assert_eq!(spawner.effects.scheduled, vec![(id, 200, Cue::Burst)]);
    }
}
