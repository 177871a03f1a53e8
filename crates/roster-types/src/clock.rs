use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, TimeDelta, Utc};

/// Source of wall-clock time for record timestamps.
///
/// The store reads time only through this trait so tests can pin or step
/// the clock explicitly.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The current instant, pushed forward if needed so that it is strictly
    /// after `previous`.
    ///
    /// Used when refreshing `updated_at` so two successive mutations never
    /// share a timestamp, even on a coarse or stalled clock.
    fn now_after(&self, previous: DateTime<Utc>) -> DateTime<Utc> {
        let now = self.now();
        if now > previous {
            now
        } else {
            previous + TimeDelta::microseconds(1)
        }
    }
}

/// The operating system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Jump to an absolute instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    /// Move forward by `step`.
    pub fn advance(&self, step: Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += step;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
