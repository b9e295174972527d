//! Core collision detection system
//!
//! Based on Game Engine Architecture 3rd Edition, Chapter 13. The field
//! holds a few dozen outlines at most, so the broad phase is a bounding box
//! reject inside an all-pairs loop and the narrow phase is the triangle
//! overlap test in [`WorldSpaceShape::intersects`].
//!
//! The system knows nothing about what a collision means. Each colliding
//! pair is handed to a caller-supplied handler together with mutable access
//! to the registry, so the handler may expire entities or add new ones while
//! the sweep is still running.

use crate::ecs::{Entity, EntityId, EntityRegistry};
use crate::physics::collision::WorldSpaceShape;

/// Pair of entities found to overlap in a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// Entity visited first in the sweep
    pub entity_a: EntityId,
    /// Entity visited second in the sweep
    pub entity_b: EntityId,
}

/// Statistics from the last sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Entities that took part
    pub candidates: usize,
    /// Pairs that passed the shape test and were dispatched
    pub dispatched: usize,
}

/// All-pairs collision sweep over an [`EntityRegistry`]
#[derive(Debug, Default)]
pub struct CollisionSystem {
    shapes: Vec<(EntityId, WorldSpaceShape)>,
    last: SweepStats,
}

impl CollisionSystem {
    /// Create a new collision system
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics from the most recent sweep
    pub fn last_sweep(&self) -> SweepStats {
        self.last
    }

    /// Test every unordered pair of live, non-inert entities once.
    ///
    /// World shapes are computed from a snapshot taken when the sweep starts;
    /// entities added by the handler take part from the next sweep. Before
    /// each pair is tested both members are checked again, so an entity the
    /// handler expired is never dispatched afterwards.
    pub fn sweep<T, F>(&mut self, registry: &mut EntityRegistry<T>, mut handler: F) -> SweepStats
    where
        T: Entity,
        F: FnMut(&mut EntityRegistry<T>, CollisionPair),
    {
        self.shapes.clear();
        for (id, entity) in registry.iter_live() {
            if !entity.is_inert() {
                self.shapes.push((id, entity.outline().to_world_space(entity.pose())));
            }
        }

        let mut stats = SweepStats {
            candidates: self.shapes.len(),
            dispatched: 0,
        };

        for i in 0..self.shapes.len() {
            for j in (i + 1)..self.shapes.len() {
                let (id_a, ref shape_a) = self.shapes[i];
                let (id_b, ref shape_b) = self.shapes[j];
                if !registry.is_live(id_a) {
                    break;
                }
                if !registry.is_live(id_b) || !shape_a.intersects(shape_b) {
                    continue;
                }
                stats.dispatched += 1;
                handler(registry, CollisionPair { entity_a: id_a, entity_b: id_b });
            }
        }

        log::trace!(
            "collision sweep: {} candidates, {} pairs dispatched",
            stats.candidates,
            stats.dispatched
        );
        self.last = stats;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::registry::tests::Dot;

    #[test]
    fn test_overlapping_pair_dispatched_once() {
        let mut registry = EntityRegistry::new();
        let a = registry.add(Dot::square(10.0, 10.0, 5.0));
        let b = registry.add(Dot::square(14.0, 10.0, 5.0));
        registry.add(Dot::square(200.0, 200.0, 5.0));

        let mut pairs = Vec::new();
        let stats = CollisionSystem::new().sweep(&mut registry, |_, pair| pairs.push(pair));

        assert_eq!(stats.candidates, 3);
        assert_eq!(pairs.len(), 1);
        let ids = [pairs[0].entity_a, pairs[0].entity_b];
        assert!(ids.contains(&a) && ids.contains(&b));
    }

    #[test]
    fn test_touching_is_not_a_collision() {
        let mut registry = EntityRegistry::new();
        registry.add(Dot::square(0.0, 0.0, 5.0));
        registry.add(Dot::square(10.0, 0.0, 5.0));

        let stats = CollisionSystem::new().sweep(&mut registry, |_, _| panic!("touching squares collided"));
        assert_eq!(stats.dispatched, 0);
    }

    #[test]
    fn test_inert_entities_never_dispatched() {
        let mut registry = EntityRegistry::new();
        registry.add(Dot::square(0.0, 0.0, 5.0));
        let mut parked = Dot::square(1.0, 0.0, 5.0);
        parked.inert = true;
        registry.add(parked);

        let stats = CollisionSystem::new().sweep(&mut registry, |_, _| panic!("inert entity collided"));
        assert_eq!(stats.candidates, 1);
    }

    #[test]
    fn test_expired_during_sweep_is_skipped() {
        // Three mutually overlapping squares: expiring both members of the
        // first pair leaves nothing else to dispatch.
        let mut registry = EntityRegistry::new();
        for x in [0.0, 1.0, 2.0] {
            registry.add(Dot::square(x, 0.0, 5.0));
        }

        let mut pairs = Vec::new();
        CollisionSystem::new().sweep(&mut registry, |registry, pair| {
            pairs.push(pair);
            registry.expire(pair.entity_a);
            registry.expire(pair.entity_b);
        });
        assert_eq!(pairs.len(), 1);
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn test_no_pair_dispatched_twice_or_skipped() {
        let mut registry = EntityRegistry::new();
        for x in [0.0, 1.0, 2.0, 3.0] {
            registry.add(Dot::square(x, 0.0, 5.0));
        }

        let mut pairs = Vec::new();
        CollisionSystem::new().sweep(&mut registry, |registry, pair| {
            pairs.push(pair);
            // Spawning mid-sweep must not feed the current sweep
            registry.add(Dot::square(0.0, 0.0, 5.0));
        });
        assert_eq!(pairs.len(), 6);
        let mut unique = pairs.clone();
        unique.sort_by_key(|p| (p.entity_a, p.entity_b));
        unique.dedup();
        assert_eq!(unique.len(), 6);
    }
}
