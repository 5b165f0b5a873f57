//! SQLite-backed [`KeyValueStorage`].

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

use crate::storage::KeyValueStorage;

/// Key-value storage over the `kv` table of a daynote database.
///
/// The connection is guarded by a mutex; every operation is a single
/// short statement (or statement pair) under the lock, which gives
/// `put_if_absent` its per-process atomicity.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Wrap an open connection (schema already initialized).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("storage connection lock poisoned"))
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .optional()
        .with_context(|| format!("failed to read key {key}"))
    }

    fn put_if_absent(&self, key: &str, value: &str) -> Result<String> {
        let conn = self.lock()?;
        let now = chrono::Utc::now().to_rfc3339();

        // ON CONFLICT DO NOTHING keeps the first write; the read-back under
        // the same lock returns whichever value actually landed.
        conn.execute(
            "INSERT INTO kv (key, value, created_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key) DO NOTHING",
            params![key, value, now],
        )
        .with_context(|| format!("failed to write key {key}"))?;

        conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .with_context(|| format!("failed to read back key {key}"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock()?;
        let now = chrono::Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO kv (key, value, created_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value, now],
        )
        .with_context(|| format!("failed to set key {key}"))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
            .with_context(|| format!("failed to remove key {key}"))?;
        Ok(())
    }
}
