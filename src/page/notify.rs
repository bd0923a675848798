// Transient notification slot
//
// Form submission outcomes surface here. The slot holds at most one
// notification; showing a new one discards the old outright, which also
// retires the old one's pending phase changes - there is never a stale
// timer mutating a removed notification.
//
// Lifecycle, measured from creation:
//   t=0       created, still off-position
//   t=100ms   slides to its visible position
//   t=4000ms  starts sliding back out
//   t=4300ms  removed entirely

use std::time::{Duration, Instant};

use tracing::debug;

/// Delay before the entry slide starts, so it reads as a transition.
pub const ENTER_AT: Duration = Duration::from_millis(100);
/// Age at which the exit slide starts.
pub const EXIT_AT: Duration = Duration::from_millis(4000);
/// Age at which the notification is removed.
pub const REMOVE_AT: Duration = Duration::from_millis(4300);
/// Duration of the entry/exit slide itself.
pub const SLIDE_FOR: Duration = Duration::from_millis(300);

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Where a notification is in its fixed lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created but not yet sliding in.
    Entering,
    /// At (or sliding toward) its resting position.
    Visible,
    /// Sliding back out; removal follows.
    Exiting,
}

/// A single transient status message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    created_at: Instant,
    phase: Phase,
}

impl Notification {
    fn new(message: String, severity: Severity, now: Instant) -> Self {
        Self {
            message,
            severity,
            created_at: now,
            phase: Phase::Entering,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Horizontal slide position for rendering: 0.0 fully on-screen,
    /// 1.0 fully off-screen to the right.
    pub fn slide(&self, now: Instant) -> f32 {
        let age = now.saturating_duration_since(self.created_at);
        match self.phase {
            Phase::Entering => 1.0,
            Phase::Visible => {
                let sliding = age.saturating_sub(ENTER_AT);
                1.0 - progress(sliding, SLIDE_FOR)
            }
            Phase::Exiting => progress(age.saturating_sub(EXIT_AT), SLIDE_FOR),
        }
    }

    fn phase_at(&self, now: Instant) -> Option<Phase> {
        let age = now.saturating_duration_since(self.created_at);
        if age >= REMOVE_AT {
            None
        } else if age >= EXIT_AT {
            Some(Phase::Exiting)
        } else if age >= ENTER_AT {
            Some(Phase::Visible)
        } else {
            Some(Phase::Entering)
        }
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// Owns the one displayed notification, if any.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing with a fresh notification.
    ///
    /// The predecessor is removed immediately, mid-lifecycle or not.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let message = message.into();
        debug!(%message, ?severity, "notification shown");
        self.current = Some(Notification::new(message, severity, now));
    }

    /// Advance the lifecycle; drops the notification once it expires.
    pub fn tick(&mut self, now: Instant) {
        if let Some(notification) = &mut self.current {
            match notification.phase_at(now) {
                Some(phase) => notification.phase = phase,
                None => self.current = None,
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
