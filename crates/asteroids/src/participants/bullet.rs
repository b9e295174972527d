//! Player and alien bullets

use arcade_engine::foundation::math::{Point2, Pose};
use arcade_engine::foundation::time::Millis;
use arcade_engine::physics::Outline;

use super::{Contact, EntitySpawner, Kind, Notice, Participant, Shooter};

/// Bullet radius
pub const RADIUS: f32 = 1.0;

/// A player bullet leaving `from` along `direction`
pub fn player(from: Point2, speed: f32, direction: f32, lifetime: Millis) -> Participant {
    fired(Kind::Bullet, from, speed, direction, lifetime)
}

/// An alien bullet leaving `from` along `direction`
pub fn alien(from: Point2, speed: f32, direction: f32, lifetime: Millis) -> Participant {
    fired(Kind::AlienBullet, from, speed, direction, lifetime)
}

fn fired(kind: Kind, from: Point2, speed: f32, direction: f32, lifetime: Millis) -> Participant {
    Participant::new(
        kind,
        Pose::at(from.x, from.y, direction).moving(speed, direction),
        Outline::circle(RADIUS),
    )
    .with_lifetime(lifetime)
}

pub(super) fn collided_with(
    bullet: &mut Participant,
    shooter: Shooter,
    other: &Contact,
    spawner: &mut dyn EntitySpawner,
) {
    let hit = match shooter {
        Shooter::Player => other.destroys_ships(),
        Shooter::Alien => other.is_destroyer() && !matches!(other.kind, Kind::Alien { .. }),
    };
    if hit {
        retire(bullet, shooter, spawner);
    }
}

/// Take the bullet out of play and release its slot
pub(super) fn retire(bullet: &mut Participant, shooter: Shooter, spawner: &mut dyn EntitySpawner) {
    bullet.expired = true;
    spawner.notify(Notice::BulletRetired(shooter));
}
