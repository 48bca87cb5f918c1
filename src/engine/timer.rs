//! One-shot deferred resolution.

use std::time::{Duration, Instant};

/// How long the wheel animates before the outcome is resolved.
pub const RESOLVE_DELAY: Duration = Duration::from_millis(3000);

/// A single scheduled firing.
///
/// The owner waits [`remaining`](Deferred::remaining) and then checks
/// [`is_due`](Deferred::is_due). Dropping the value is the cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    started: Instant,
    due: Instant,
}

impl Deferred {
    pub fn schedule(now: Instant, delay: Duration) -> Self {
        Self {
            started: now,
            due: now + delay,
        }
    }

    pub fn due(&self) -> Instant {
        self.due
    }

    /// Time left before firing; zero once due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    /// Fraction of the delay elapsed, clamped to `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        let total = self.due.saturating_duration_since(self.started);
        if total.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
    }
}
