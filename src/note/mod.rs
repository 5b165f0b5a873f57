//! Core engine: content table, date keys, rotation, daily cache, history.

pub mod cache;
pub mod content;
pub mod datekey;
pub mod history;
pub mod rotation;

use anyhow::Result;
use chrono::NaiveDate;

use crate::clock::Clock;
use crate::note::cache::DailyCache;
use crate::note::content::NoteResolver;
use crate::note::datekey::DateKey;

/// Compute the rotation-assigned note for a calendar day.
///
/// Pure with respect to storage: the date's 1-based day-of-year ordinal is
/// rotated into the table and resolved, nothing is persisted.
pub fn note_for(resolver: &dyn NoteResolver, date: NaiveDate) -> Result<String> {
    let index = rotation::index_for(datekey::day_of_year(date), resolver.len());
    resolver
        .resolve(index)
        .map(str::to_owned)
        .ok_or_else(|| anyhow::anyhow!("content table has no entry at index {index}"))
}

/// Today's note: the read path of the engine.
///
/// Keys the current day, then reads through the daily cache. On the first
/// access of the day the rotation-assigned note is computed and committed;
/// every later access returns the committed text unchanged.
pub fn todays_note(
    cache: &DailyCache,
    resolver: &dyn NoteResolver,
    clock: &dyn Clock,
) -> Result<(NaiveDate, String)> {
    let today = clock.today();
    let key = DateKey::for_date(today);
    let note = cache.get_or_create(&key, || note_for(resolver, today))?;
    Ok((today, note))
}
