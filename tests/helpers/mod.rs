#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use daynote::clock::FixedClock;
use daynote::db;
use daynote::note::content::ContentTable;
use daynote::storage::{KeyValueStorage, SqliteStorage};

/// Open a fresh in-memory database behind the storage interface.
pub fn test_storage() -> Arc<SqliteStorage> {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    db::schema::init_schema(&conn).unwrap();
    Arc::new(SqliteStorage::new(conn))
}

/// A content table with `n` distinct entries ("entry 001".."entry NNN").
pub fn sample_table(n: usize) -> ContentTable {
    let notes = (1..=n).map(|i| format!("entry {i:03}")).collect();
    ContentTable::from_notes(notes).unwrap()
}

/// A clock pinned to the given calendar day.
pub fn fixed_clock(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

/// Storage wrapper whose operations can be made to fail on demand.
///
/// While `failing` is set every operation errors, simulating an
/// unavailable backing store; once cleared, operations pass through to the
/// inner storage again.
pub struct FlakyStorage {
    inner: Arc<SqliteStorage>,
    failing: AtomicBool,
}

impl FlakyStorage {
    pub fn new(inner: Arc<SqliteStorage>) -> Self {
        Self {
            inner,
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("storage unavailable");
        }
        Ok(())
    }
}

impl KeyValueStorage for FlakyStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        self.inner.get(key)
    }

    fn put_if_absent(&self, key: &str, value: &str) -> Result<String> {
        self.check()?;
        self.inner.put_if_absent(key, value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check()?;
        self.inner.remove(key)
    }
}
