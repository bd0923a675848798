// Trailing-edge throttle for high-frequency events
//
// Scroll input arrives far more often than the active-section match needs to
// run. Rather than recomputing per event, callers arm the throttle on every
// event and poll it from the tick loop: a burst of arms collapses into a
// single firing, one interval after the last arm.

use std::time::{Duration, Instant};

/// Coalesces rapid repeated triggers into one deferred firing.
///
/// Each `schedule` call replaces any pending deadline with `now + interval`,
/// so only the last call in a burst counts. `poll` fires at most once per
/// armed deadline; a scheduled firing is never dropped, it just waits for
/// the burst to end.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the pending firing at `now + interval`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Returns true exactly once per armed deadline, when it has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a firing is still pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
