//! Time-source abstraction.
//!
//! Date-dependent logic (today's key, the 7-day window) never reads the
//! system clock directly; it goes through [`Clock`] so tests can pin the
//! calendar day.

use chrono::{Local, NaiveDate};

/// Source of the current calendar day.
///
/// Implementations report the day in whatever timezone they consider
/// current; [`SystemClock`] uses the device's local timezone at the moment
/// of the call.
pub trait Clock: Send + Sync {
    /// The current calendar day.
    fn today(&self) -> NaiveDate;
}

/// Reads the device's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one calendar day. Intended for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
