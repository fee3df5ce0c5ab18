//! The recurring tick timer.
//!
//! At most one tick is ever pending: rescheduling cancels the pending
//! deadline and arms a fresh one a full interval from `now`.  Callers pass
//! `now` explicitly so the schedule is testable without sleeping.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct Timer {
    interval: Duration,
    next_due: Instant,
}

impl Timer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Timer {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Cancel the pending tick and start over at `interval`.
    pub fn reschedule(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next_due = now + interval;
    }

    /// Time left before the next tick fires (zero if overdue).
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Consume the pending tick if it is due, arming the next one.
    ///
    /// A caller that fell behind by several intervals gets a single tick;
    /// the missed ones are dropped rather than replayed in a burst.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }
}
