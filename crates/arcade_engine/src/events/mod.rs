//! Countdown scheduling following Game Engine Architecture Ch 16.8
//!
//! Key principles:
//! - Deferred delivery: a countdown is posted with a relative delay and
//!   delivered on the first poll at or after its due time
//! - Single shot: each countdown is delivered exactly once, then discarded
//! - Owner-bound: every countdown names the entity that receives it; the
//!   caller decides what a countdown for an expired owner means
//! - Polled on the tick thread, so delivery never races the simulation

use crate::ecs::EntityId;
use crate::foundation::time::Millis;

/// A countdown that has come due
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown<P> {
    /// Entity that scheduled the countdown
    pub owner: EntityId,
    /// Opaque payload handed back to the owner
    pub payload: P,
    /// Time the countdown was due
    pub due: Millis,
}

/// Deferred queue of single-shot countdowns
#[derive(Debug)]
pub struct CountdownScheduler<P> {
    deferred_queue: Vec<Countdown<P>>,
}

impl<P> Default for CountdownScheduler<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> CountdownScheduler<P> {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self {
            deferred_queue: Vec::new(),
        }
    }

    /// Post a countdown for delivery `delay` milliseconds after `now`
    pub fn schedule(&mut self, owner: EntityId, payload: P, now: Millis, delay: Millis) {
        self.deferred_queue.push(Countdown {
            owner,
            payload,
            due: now.saturating_add(delay),
        });
    }

    /// Remove and return every countdown due at `now`, earliest first.
    ///
    /// Countdowns scheduled after this call returns are not part of the
    /// batch, even with a zero delay; they wait for the next poll.
    pub fn poll(&mut self, now: Millis) -> Vec<Countdown<P>> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.deferred_queue.len() {
            if self.deferred_queue[i].due <= now {
                due.push(self.deferred_queue.remove(i));
            } else {
                i += 1;
            }
        }
        // Stable: equal due times keep scheduling order
        due.sort_by_key(|countdown| countdown.due);
        due
    }

    /// Number of countdowns not yet delivered
    pub fn pending(&self) -> usize {
        self.deferred_queue.len()
    }

    /// Number of pending countdowns owned by `owner`
    pub fn pending_for(&self, owner: EntityId) -> usize {
        self.deferred_queue.iter().filter(|c| c.owner == owner).count()
    }

    /// Drop every pending countdown (useful for state transitions)
    pub fn clear(&mut self) {
        self.deferred_queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn owners(n: usize) -> Vec<EntityId> {
        let mut map: SlotMap<EntityId, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn test_deferred_delivery() {
        let owner = owners(1)[0];
        let mut scheduler = CountdownScheduler::new();
        scheduler.schedule(owner, "appear", 0, 1000);

        assert!(scheduler.poll(999).is_empty());
        let fired = scheduler.poll(1000);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].payload, "appear");
        assert_eq!(fired[0].owner, owner);

        // Single shot
        assert!(scheduler.poll(5000).is_empty());
    }

    #[test]
    fn test_late_poll_still_delivers_in_due_order() {
        let ids = owners(2);
        let mut scheduler = CountdownScheduler::new();
        scheduler.schedule(ids[0], 2, 0, 300);
        scheduler.schedule(ids[1], 1, 0, 100);
        scheduler.schedule(ids[0], 3, 0, 900);

        let fired: Vec<_> = scheduler.poll(500).into_iter().map(|c| c.payload).collect();
        assert_eq!(fired, vec![1, 2]);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.pending_for(ids[0]), 1);
        assert_eq!(scheduler.pending_for(ids[1]), 0);
    }

    #[test]
    fn test_rescheduled_during_delivery_waits_for_next_poll() {
        let owner = owners(1)[0];
        let mut scheduler = CountdownScheduler::new();
        scheduler.schedule(owner, "burst", 0, 200);

        for countdown in scheduler.poll(200) {
            scheduler.schedule(countdown.owner, countdown.payload, 200, 0);
        }
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.poll(200).len(), 1);
    }

    #[test]
    fn test_clear_drops_everything() {
        let owner = owners(1)[0];
        let mut scheduler = CountdownScheduler::new();
        scheduler.schedule(owner, (), 0, 10);
        scheduler.schedule(owner, (), 0, 20);
        scheduler.clear();
        assert_eq!(scheduler.pending(), 0);
        assert!(scheduler.poll(100).is_empty());
    }
}
