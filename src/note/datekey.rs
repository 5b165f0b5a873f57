//! Canonical date keys.
//!
//! A [`DateKey`] identifies one calendar day as a `yyyy-MM-dd` string in
//! the Gregorian calendar. Formatting goes through [`chrono::NaiveDate`],
//! which has no locale- or era-dependent behavior, so two keys for the
//! same calendar day are always byte-identical. Which day is "current" is
//! decided by the [`Clock`](crate::clock::Clock) that produced the date,
//! in the device's timezone at the moment of the call.

use chrono::{Datelike, NaiveDate};

/// Canonical string identifier for one calendar day (`yyyy-MM-dd`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateKey(String);

impl DateKey {
    /// Key the given calendar day.
    pub fn for_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1-based day-of-year ordinal (1..=366).
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn key_is_zero_padded_iso_date() {
        assert_eq!(DateKey::for_date(date(2026, 8, 7)).as_str(), "2026-08-07");
        assert_eq!(DateKey::for_date(date(2026, 12, 31)).as_str(), "2026-12-31");
    }

    #[test]
    fn same_day_produces_identical_keys() {
        let a = DateKey::for_date(date(2026, 1, 5));
        let b = DateKey::for_date(date(2026, 1, 5));
        assert_eq!(a, b);
    }

    #[test]
    fn day_of_year_starts_at_one() {
        assert_eq!(day_of_year(date(2026, 1, 1)), 1);
        assert_eq!(day_of_year(date(2026, 12, 31)), 365);
    }

    #[test]
    fn leap_year_has_366_ordinals() {
        assert_eq!(day_of_year(date(2024, 2, 29)), 60);
        assert_eq!(day_of_year(date(2024, 12, 31)), 366);
    }
}
