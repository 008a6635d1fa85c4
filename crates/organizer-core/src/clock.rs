//! Time source abstraction.
//!
//! Recurrence rules work on local calendar dates, so the clock hands out
//! naive local date-times. Engine operations take `now` as a parameter and
//! never consult a clock themselves.

use chrono::{Local, NaiveDateTime};

/// Supplies the current local date and time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock backed by the system timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Move the clock forward (or backward) by `delta`.
    pub fn advance(&mut self, delta: chrono::Duration) {
        self.0 += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn fixed_clock_returns_its_instant() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let mut clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);

        clock.advance(Duration::days(1));
        assert_eq!(clock.now().date(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    }
}
