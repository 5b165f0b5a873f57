mod helpers;

use helpers::{fixed_clock, sample_table, test_storage};
use std::cell::Cell;

use daynote::note::cache::DailyCache;
use daynote::note::datekey::DateKey;
use daynote::note::todays_note;
use chrono::NaiveDate;

fn key(y: i32, m: u32, d: u32) -> DateKey {
    DateKey::for_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn get_or_create_invokes_compute_at_most_once() {
    let cache = DailyCache::new(test_storage());
    let k = key(2026, 8, 7);
    let calls = Cell::new(0u32);

    let first = cache
        .get_or_create(&k, || {
            calls.set(calls.get() + 1);
            Ok("the note".to_string())
        })
        .unwrap();
    let second = cache
        .get_or_create(&k, || {
            calls.set(calls.get() + 1);
            Ok("the note".to_string())
        })
        .unwrap();

    assert_eq!(first, "the note");
    assert_eq!(second, "the note");
    assert_eq!(calls.get(), 1);
}

#[test]
fn stored_value_is_never_rewritten() {
    let cache = DailyCache::new(test_storage());
    let k = key(2026, 8, 7);

    let first = cache.get_or_create(&k, || Ok("first".to_string())).unwrap();
    // a later caller computing a different value must still see the first write
    let second = cache.get_or_create(&k, || Ok("second".to_string())).unwrap();

    assert_eq!(first, "first");
    assert_eq!(second, "first");
    assert_eq!(cache.get(&k).unwrap().as_deref(), Some("first"));
}

#[test]
fn get_is_a_pure_lookup() {
    let cache = DailyCache::new(test_storage());
    let k = key(2026, 8, 7);

    assert_eq!(cache.get(&k).unwrap(), None);
    // looking up a missing day does not create it
    assert_eq!(cache.get(&k).unwrap(), None);
}

#[test]
fn different_days_get_independent_entries() {
    let cache = DailyCache::new(test_storage());

    cache
        .get_or_create(&key(2026, 8, 6), || Ok("yesterday".to_string()))
        .unwrap();
    cache
        .get_or_create(&key(2026, 8, 7), || Ok("today".to_string()))
        .unwrap();

    assert_eq!(
        cache.get(&key(2026, 8, 6)).unwrap().as_deref(),
        Some("yesterday")
    );
    assert_eq!(
        cache.get(&key(2026, 8, 7)).unwrap().as_deref(),
        Some("today")
    );
}

#[test]
fn todays_note_is_stable_across_accesses() {
    let cache = DailyCache::new(test_storage());
    let table = sample_table(120);
    let clock = fixed_clock(2026, 1, 1);

    let (date, first) = todays_note(&cache, &table, &clock).unwrap();
    let (_, second) = todays_note(&cache, &table, &clock).unwrap();

    assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    assert_eq!(first, second);
}

#[test]
fn rotation_assigns_first_entry_to_january_first() {
    let cache = DailyCache::new(test_storage());
    let table = sample_table(120);

    // day-of-year 1 -> index 0
    let (_, note) = todays_note(&cache, &table, &fixed_clock(2026, 1, 1)).unwrap();
    assert_eq!(note, "entry 001");
}

#[test]
fn rotation_wraps_at_table_size() {
    let table = sample_table(120);

    // May 1st of a non-leap year is day-of-year 121 -> index 0 again
    let (_, note) =
        todays_note(&DailyCache::new(test_storage()), &table, &fixed_clock(2026, 5, 1)).unwrap();
    assert_eq!(note, "entry 001");
}
