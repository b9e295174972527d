//! Participants
//!
//! Everything that moves on the field is a [`Participant`]: one struct with a
//! [`Kind`] tag, rather than a trait object per kind. Kind-specific
//! construction and reactions live in the submodules; this module holds the
//! shared data model and the dispatch from a collision or countdown to the
//! right kind.

pub mod alien;
pub mod asteroid;
pub mod bullet;
pub mod capability;
pub mod debris;
pub mod ship;
pub mod spawner;

use arcade_engine::ecs::{Entity, EntityId};
use arcade_engine::foundation::math::{Point2, Pose};
use arcade_engine::foundation::time::Millis;
use arcade_engine::physics::Outline;

pub use alien::{AlienSize, Side};
pub use asteroid::AsteroidSize;
pub use capability::Capabilities;
pub use debris::DebrisShape;
pub use spawner::{Effects, EntitySpawner, SpawnBuffer};

/// What a participant is, with the per-kind state it carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// The player's ship
    Ship {
        /// Exhaust flame showing
        flame: bool,
    },
    /// A rock
    Asteroid {
        /// Size class
        size: AsteroidSize,
        /// Which of the outline variants it uses
        variant: usize,
    },
    /// A player bullet
    Bullet,
    /// A bullet fired by an alien
    AlienBullet,
    /// An alien saucer
    Alien {
        /// Large or small saucer
        size: AlienSize,
        /// Edge it entered from
        side: Side,
    },
    /// Harmless wreckage
    Debris(DebrisShape),
}

impl Kind {
    /// Fixed capability set of this kind
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::Ship { .. } | Self::Bullet => Capabilities::ASTEROID_DESTROYER,
            Self::Asteroid { .. } => Capabilities::SHIP_DESTROYER,
            Self::AlienBullet | Self::Alien { .. } => {
                Capabilities::SHIP_DESTROYER | Capabilities::ASTEROID_DESTROYER
            }
            Self::Debris(_) => Capabilities::empty(),
        }
    }

    /// Whether this is an asteroid
    pub fn is_asteroid(&self) -> bool {
        matches!(self, Self::Asteroid { .. })
    }

    /// Whether this is the player's ship
    pub fn is_ship(&self) -> bool {
        matches!(self, Self::Ship { .. })
    }
}

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shooter {
    /// The player's ship
    Player,
    /// An alien saucer
    Alien,
}

/// Payload of a participant countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// End of a limited lifetime
    Expire,
    /// Ship auto-acceleration burst
    Burst,
    /// Staged alien becomes active
    Appear,
    /// Alien starts moving
    Move,
    /// Alien changes direction
    Turn,
    /// Alien fires
    Fire,
}

/// Something a participant tells the controller about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notice {
    /// The ship with this id was destroyed
    ShipDestroyed(EntityId),
    /// An asteroid of this size was destroyed
    AsteroidDestroyed(AsteroidSize),
    /// A staged alien became active
    AlienAppeared(AlienSize),
    /// An alien of this size was destroyed
    AlienDestroyed(AlienSize),
    /// A bullet left play
    BulletRetired(Shooter),
}

/// Read-only snapshot of a collision partner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Partner id
    pub id: EntityId,
    /// Partner kind
    pub kind: Kind,
    /// Partner capabilities
    pub capabilities: Capabilities,
    /// Partner position
    pub position: Point2,
}

impl Contact {
    /// Partner can destroy ships
    pub fn destroys_ships(&self) -> bool {
        self.capabilities.contains(Capabilities::SHIP_DESTROYER)
    }

    /// Partner can destroy ships or asteroids
    pub fn is_destroyer(&self) -> bool {
        self.capabilities.is_destroyer()
    }
}

/// A simulated object on the field
#[derive(Debug, Clone)]
pub struct Participant {
    kind: Kind,
    pose: Pose,
    outline: Outline,
    inert: bool,
    expired: bool,
    lifetime: Option<Millis>,
    friction: Option<f32>,
}

impl Participant {
    pub(crate) fn new(kind: Kind, pose: Pose, outline: Outline) -> Self {
        Self {
            kind,
            pose,
            outline,
            inert: false,
            expired: false,
            lifetime: None,
            friction: None,
        }
    }

    #[must_use]
    pub(crate) fn with_lifetime(mut self, lifetime: Millis) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    #[must_use]
    pub(crate) fn with_friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    /// Kind and per-kind state
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Capability set of this participant's kind
    pub fn capabilities(&self) -> Capabilities {
        self.kind.capabilities()
    }

    /// Lifetime to schedule when the participant is added, if limited
    pub fn lifetime(&self) -> Option<Millis> {
        self.lifetime
    }

    /// Hold the participant out of play (or bring it back)
    pub fn set_inert(&mut self, inert: bool) {
        self.inert = inert;
    }

    /// Snapshot handed to collision partners
    pub fn contact(&self, id: EntityId) -> Contact {
        Contact {
            id,
            kind: self.kind,
            capabilities: self.capabilities(),
            position: self.pose.position,
        }
    }

    /// React to overlapping `other`
    pub fn collided_with(&mut self, me: EntityId, other: &Contact, spawner: &mut dyn EntitySpawner) {
        if self.expired {
            return;
        }
        match self.kind {
            Kind::Ship { .. } => ship::collided_with(self, me, other, spawner),
            Kind::Asteroid { size, variant } => {
                asteroid::collided_with(self, size, variant, other, spawner);
            }
            Kind::Bullet => bullet::collided_with(self, Shooter::Player, other, spawner),
            Kind::AlienBullet => bullet::collided_with(self, Shooter::Alien, other, spawner),
            Kind::Alien { size, .. } => alien::collided_with(self, size, other, spawner),
            Kind::Debris(_) => {}
        }
    }

    /// Handle a countdown this participant scheduled
    pub fn on_countdown(&mut self, me: EntityId, cue: Cue, spawner: &mut dyn EntitySpawner) {
        if self.expired {
            log::trace!("countdown {cue:?} for expired participant ignored");
            return;
        }
        match (self.kind, cue) {
            (Kind::Bullet, Cue::Expire) => bullet::retire(self, Shooter::Player, spawner),
            (Kind::AlienBullet, Cue::Expire) => bullet::retire(self, Shooter::Alien, spawner),
            (Kind::Debris(_), Cue::Expire) => self.expired = true,
            (Kind::Ship { .. }, Cue::Burst) => ship::burst(self, me, spawner),
            (Kind::Alien { .. }, _) => alien::on_countdown(self, me, cue, spawner),
            (kind, cue) => log::trace!("{kind:?} ignores countdown {cue:?}"),
        }
    }
}

impl Entity for Participant {
    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }

    fn outline(&self) -> &Outline {
        &self.outline
    }

    fn is_inert(&self) -> bool {
        self.inert
    }

    fn is_expired(&self) -> bool {
        self.expired
    }

    fn expire(&mut self) {
        self.expired = true;
    }

    fn advance(&mut self) {
        if let Some(friction) = self.friction {
            self.pose.apply_friction(friction);
        }
        self.pose.translate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_per_kind() {
        let ship = Kind::Ship { flame: false };
        let rock = Kind::Asteroid { size: AsteroidSize::Large, variant: 0 };
        let saucer = Kind::Alien { size: AlienSize::Small, side: Side::Left };

        assert_eq!(ship.capabilities(), Capabilities::ASTEROID_DESTROYER);
        assert_eq!(Kind::Bullet.capabilities(), Capabilities::ASTEROID_DESTROYER);
        assert_eq!(rock.capabilities(), Capabilities::SHIP_DESTROYER);
        assert_eq!(Kind::AlienBullet.capabilities(), Capabilities::all());
        assert_eq!(saucer.capabilities(), Capabilities::all());
        assert!(Kind::Debris(DebrisShape::Point).capabilities().is_empty());
    }
}
