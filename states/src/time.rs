use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

/// Wall-clock state.
///
/// Widgets and states that care about elapsed time read the clock from here
/// instead of calling `Utc::now()` directly, so tests can pin it.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    now: DateTime<Utc>,
}

impl Default for Time {
    fn default() -> Self {
        Self { now: Utc::now() }
    }
}

impl Time {
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Advance the clock. The app calls this once per frame; tests call it
    /// with a fixed instant.
    pub fn set(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.now
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_is_settable() {
        let pinned = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let mut time = Time::default();
        time.set(pinned);
        assert_eq!(time.now(), pinned);
        assert_eq!(*time.as_ref(), pinned);
    }
}
