//! Entity implementation
//!
//! An entity is any simulated object that lives in an
//! [`EntityRegistry`](super::EntityRegistry): it has a pose, a collision
//! outline and a lifecycle (inert, live, expired).

use crate::foundation::math::Pose;
use crate::physics::collision::Outline;

slotmap::new_key_type! {
    /// Stable, generational entity identifier.
    ///
    /// Ids are never reused while an old copy could still be held, so a stale
    /// id simply stops resolving after its entity is compacted away.
    pub struct EntityId;
}

/// Behaviour every registry-managed entity provides
pub trait Entity {
    /// Current pose
    fn pose(&self) -> &Pose;

    /// Mutable pose
    fn pose_mut(&mut self) -> &mut Pose;

    /// Collision outline in entity-local coordinates
    fn outline(&self) -> &Outline;

    /// Inert entities neither move nor take part in collision tests
    fn is_inert(&self) -> bool {
        false
    }

    /// Whether the entity has been marked for removal
    fn is_expired(&self) -> bool;

    /// Mark for removal. Must be idempotent.
    fn expire(&mut self);

    /// Per-tick motion. The default translates by the current velocity.
    fn advance(&mut self) {
        self.pose_mut().translate();
    }
}
