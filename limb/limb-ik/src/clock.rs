//! Elapsed time relative to the first frame.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Converts host timestamps (e.g. `performance.now()` in milliseconds) into
/// elapsed time since the animation started.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameClock {
    start: f64,
}

impl FrameClock {
    /// Start counting at host timestamp `now`.
    #[must_use]
    pub const fn start_at(now: f64) -> Self {
        Self { start: now }
    }

    /// Host timestamp of the start.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Elapsed time at host timestamp `now`. Timestamps before the start
    /// read as zero.
    #[must_use]
    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.start).max(0.0)
    }

    /// Reset the origin to `now`.
    pub fn restart(&mut self, now: f64) {
        self.start = now;
    }
}
