//! Entity Registry
//!
//! Owns every live entity in dense, handle-addressed storage. Entities are
//! never removed while something could be iterating: `expire` only flips a
//! flag, traversals walk a snapshot of ids taken up front, and the physical
//! removal happens in [`EntityRegistry::compact`] at the tick boundary.

use slotmap::SlotMap;

use super::{Entity, EntityId};
use crate::foundation::math::Field;

/// Arena of entities keyed by [`EntityId`]
pub struct EntityRegistry<T: Entity> {
    entities: SlotMap<EntityId, T>,
}

impl<T: Entity> Default for EntityRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityRegistry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
        }
    }

    /// Take ownership of an entity
    pub fn add(&mut self, entity: T) -> EntityId {
        self.entities.insert(entity)
    }

    /// Mark an entity for removal.
    ///
    /// Safe to call while a traversal is in progress. Returns `false` if the
    /// entity was already expired or no longer exists.
    pub fn expire(&mut self, id: EntityId) -> bool {
        match self.entities.get_mut(id) {
            Some(entity) if !entity.is_expired() => {
                entity.expire();
                true
            }
            _ => false,
        }
    }

    /// Expire every entity
    pub fn clear(&mut self) {
        for entity in self.entities.values_mut() {
            entity.expire();
        }
    }

    /// Physically drop expired entities. Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.entities.len();
        self.entities.retain(|_, entity| !entity.is_expired());
        before - self.entities.len()
    }

    /// Look up an entity, expired or not
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.entities.get(id)
    }

    /// Mutable lookup, expired or not
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.entities.get_mut(id)
    }

    /// Whether `id` names a stored entity that has not expired
    pub fn is_live(&self, id: EntityId) -> bool {
        self.entities.get(id).is_some_and(|entity| !entity.is_expired())
    }

    /// Number of live entities
    pub fn live_count(&self) -> usize {
        self.entities.values().filter(|entity| !entity.is_expired()).count()
    }

    /// Snapshot of the ids of every live entity
    pub fn live_ids(&self) -> Vec<EntityId> {
        self.iter_live().map(|(id, _)| id).collect()
    }

    /// Iterate over live entities
    pub fn iter_live(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.entities.iter().filter(|(_, entity)| !entity.is_expired())
    }

    /// Visit every entity that was live when the traversal started.
    ///
    /// The closure may expire entities (including ones not yet visited);
    /// those are skipped when their turn comes.
    pub fn for_each_live(&mut self, mut f: impl FnMut(EntityId, &mut T)) {
        for id in self.live_ids() {
            if let Some(entity) = self.entities.get_mut(id) {
                if !entity.is_expired() {
                    f(id, entity);
                }
            }
        }
    }

    /// Advance and wrap every live, non-inert entity
    pub fn advance_all(&mut self, field: &Field) {
        self.for_each_live(|_, entity| {
            if !entity.is_inert() {
                entity.advance();
                field.wrap(entity.pose_mut());
            }
        });
    }
}
