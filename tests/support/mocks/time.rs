// tests/support/mocks/time.rs
use campus_books::application::ports::time::Clock;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::Mutex;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic base timestamp for tests.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Starts at `fixed_now()` and moves one second forward on every read, so
/// rows created in sequence have distinct, ordered timestamps.
#[derive(Debug)]
pub struct FixedClock {
    next: Mutex<DateTime<Utc>>,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            next: Mutex::new(fixed_now()),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + Duration::seconds(1);
        now
    }
}
