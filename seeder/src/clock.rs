//! Time source for span and log timestamps.

use chrono::Utc;

/// Source of "now" in nanoseconds since the Unix epoch.
pub trait Clock {
    /// Returns the current time in nanoseconds since the Unix epoch.
    fn now_unix_nanos(&self) -> u64;
}

/// Wall clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_nanos(&self) -> u64 {
        // Out of range only after the year 2262.
        Utc::now()
            .timestamp_nanos_opt()
            .and_then(|nanos| u64::try_from(nanos).ok())
            .unwrap_or_default()
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_unix_nanos(&self) -> u64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_unix_nanos(&self) -> u64 {
        (**self).now_unix_nanos()
    }
}
