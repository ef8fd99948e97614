//! Clock abstraction for end-date computation.
//!
//! The readings window closes at the current UTC calendar date. Hiding that
//! behind a trait lets tests pin the end date instead of depending on
//! wall-clock time.

use chrono::{NaiveDate, Utc};

/// Source of the current UTC calendar date
pub trait Clock {
    /// Current calendar date in UTC
    fn today_utc(&self) -> NaiveDate;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today_utc(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today_utc(&self) -> NaiveDate {
        self.0
    }
}
