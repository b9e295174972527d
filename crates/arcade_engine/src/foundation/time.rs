//! Time management utilities
//!
//! The simulation only ever asks "what time is it, in milliseconds?". Hosts
//! plug in a [`SystemClock`]; tests drive a [`ManualClock`] by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Milliseconds on a monotonic clock
pub type Millis = u64;

/// Monotonic millisecond time source
pub trait Clock {
    /// Current time in milliseconds since the clock's epoch
    fn now_ms(&self) -> Millis;

    /// Block until `duration` has passed on this clock
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    /// Create a clock whose epoch is now
    pub fn new() -> Self {
        Self { started: Instant::now() }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        Millis::try_from(self.started.elapsed().as_millis()).unwrap_or(Millis::MAX)
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    /// Create a clock reading zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward
    pub fn advance(&self, by: Millis) {
        self.now.set(self.now.get().saturating_add(by));
    }

    /// Jump to an absolute time
    pub fn set(&self, at: Millis) {
        self.now.set(at);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(Millis::try_from(duration.as_millis()).unwrap_or(Millis::MAX));
    }
}

/// Fixed-interval pacing for the tick loop.
///
/// Tracks the deadline of the next tick and reports overruns so the loop can
/// log them without halting.
#[derive(Debug, Clone)]
pub struct TickPacer {
    interval: Millis,
    next_deadline: Millis,
    ticks: u64,
    overruns: u64,
}

impl TickPacer {
    /// Create a pacer whose first tick is due at `start`
    pub fn new(interval: Millis, start: Millis) -> Self {
        Self {
            interval: interval.max(1),
            next_deadline: start,
            ticks: 0,
            overruns: 0,
        }
    }

    /// Tick interval in milliseconds
    pub fn interval(&self) -> Millis {
        self.interval
    }

    /// Time left until the next tick is due (zero if already due)
    pub fn wait_time(&self, now: Millis) -> Duration {
        Duration::from_millis(self.next_deadline.saturating_sub(now))
    }

    /// Record a completed tick that finished at `finished`.
    ///
    /// Returns `true` if the tick overran its slot. After an overrun the
    /// schedule restarts from `finished` instead of trying to catch up.
    pub fn complete(&mut self, finished: Millis) -> bool {
        self.ticks += 1;
        self.next_deadline += self.interval;
        if finished > self.next_deadline {
            self.overruns += 1;
            self.next_deadline = finished;
            true
        } else {
            false
        }
    }

    /// Number of completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of ticks that missed their deadline
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}
