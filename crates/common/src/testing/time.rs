//! Mock clock for deterministic expiry tests

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use crate::time::Clock;

/// Clock that only moves when told to
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the code under test.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use olamaps_common::testing::MockClock;
/// use olamaps_common::time::Clock;
///
/// let clock = MockClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_secs(5));
/// assert_eq!((clock.now() - start).num_seconds(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a clock fixed at 2024-01-01T00:00:00Z.
    #[must_use]
    pub fn new() -> Self {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_else(Utc::now);
        Self::at(start)
    }

    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Arc::new(Mutex::new(now)) }
    }

    /// Simulate time passing without waiting.
    pub fn advance(&self, duration: Duration) {
        // Test utility: panic on poisoned mutex to fail tests early
        let mut now = self.now.lock().expect("mutex poisoned");
        *now += chrono::Duration::from_std(duration).expect("duration out of range");
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("mutex poisoned") = now;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        // Test utility: panic on poisoned mutex to fail tests early
        *self.now.lock().expect("mutex poisoned")
    }
}
