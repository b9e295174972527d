//! Collision policy
//!
//! The engine sweep finds overlapping pairs; this module decides what a pair
//! means. Both members react, each seeing a snapshot of the other taken
//! before either reacted, so the outcome never depends on which one the
//! sweep happened to visit first.

use arcade_engine::ecs::EntityRegistry;
use arcade_engine::physics::CollisionPair;

use crate::participants::{EntitySpawner, Participant};

/// Let both members of an overlapping pair react to each other
pub fn resolve(registry: &mut EntityRegistry<Participant>, pair: CollisionPair, spawner: &mut dyn EntitySpawner) {
    let CollisionPair { entity_a, entity_b } = pair;
    let (Some(a), Some(b)) = (registry.get(entity_a), registry.get(entity_b)) else {
        log::trace!("collision pair with a missing participant ignored");
        return;
    };
    let contact_a = a.contact(entity_a);
    let contact_b = b.contact(entity_b);
    log::debug!("collision: {:?} <-> {:?}", contact_a.kind, contact_b.kind);

    if let Some(a) = registry.get_mut(entity_a) {
        a.collided_with(entity_a, &contact_b, spawner);
    }
    if let Some(b) = registry.get_mut(entity_b) {
        b.collided_with(entity_b, &contact_a, spawner);
    }
}
