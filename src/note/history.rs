//! The rolling 7-day history window.
//!
//! [`seed_if_missing`] backfills cache entries for the window so history
//! stays complete even when the app was not opened on some days; [`last7`]
//! then reads the same store without creating anything. The two passes are
//! independent so that a read can never turn into a write.

use anyhow::Result;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::warn;

use crate::clock::Clock;
use crate::note::cache::DailyCache;
use crate::note::content::NoteResolver;
use crate::note::datekey::DateKey;
use crate::note::note_for;

/// Size of the history window, today included.
pub const HISTORY_DAYS: usize = 7;

/// Placeholder shown for a day whose entry could not be read back.
pub const NO_ENTRY: &str = "—";

/// One day of history: the date, a human-readable label, and the note.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub date: NaiveDate,
    pub label: String,
    pub note: String,
}

/// Human-readable date label, e.g. `Aug 7, 2026`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn window(today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    // today first, then back 6 days
    (0..HISTORY_DAYS).filter_map(move |offset| today.checked_sub_days(Days::new(offset as u64)))
}

/// Backfill the last 7 days through the write-once path.
///
/// Each missing day gets the rotation-assigned note for that day's own
/// day-of-year ordinal, so entries created retroactively match what the
/// day would have shown live. Idempotent: once all 7 entries exist, the
/// pass changes nothing. A day that fails to persist is logged and
/// skipped rather than aborting the pass.
pub fn seed_if_missing(
    cache: &DailyCache,
    resolver: &dyn NoteResolver,
    clock: &dyn Clock,
) -> Result<()> {
    for date in window(clock.today()) {
        let key = DateKey::for_date(date);
        cache.get_or_create(&key, || note_for(resolver, date))?;
    }
    Ok(())
}

/// Read the last 7 days of history, today first.
///
/// Read-only: days still absent after seeding (storage failure) surface as
/// the [`NO_ENTRY`] placeholder, never as an error.
pub fn last7(cache: &DailyCache, clock: &dyn Clock) -> Vec<HistoryRecord> {
    window(clock.today())
        .map(|date| {
            let key = DateKey::for_date(date);
            let note = match cache.get(&key) {
                Ok(Some(note)) => note,
                Ok(None) => NO_ENTRY.to_string(),
                Err(err) => {
                    warn!(key = %key, error = %err, "history read failed for day");
                    NO_ENTRY.to_string()
                }
            };
            HistoryRecord {
                date,
                label: date_label(date),
                note,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_matches_medium_date_style() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(date_label(date), "Aug 7, 2026");

        let date = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
        assert_eq!(date_label(date), "Dec 25, 2026");
    }

    #[test]
    fn window_is_seven_days_descending() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let days: Vec<NaiveDate> = window(today).collect();
        assert_eq!(days.len(), HISTORY_DAYS);
        assert_eq!(days[0], today);
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
    }
}
