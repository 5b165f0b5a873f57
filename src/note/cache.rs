//! The daily cache: write-once persistence of each day's assigned note.
//!
//! [`DailyCache`] is the single owner of the `note.*` key namespace.
//! [`get_or_create`](DailyCache::get_or_create) is the one write path: a
//! note is committed the first time its day is observed and never
//! rewritten. If storage is unavailable the computed note is still
//! returned for the current call (the user always gets a note for
//! "today") and the key degrades to recompute-on-next-call until storage
//! recovers.

use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

use crate::note::datekey::DateKey;
use crate::storage::KeyValueStorage;

const KEY_PREFIX: &str = "note.";

/// Persistent mapping from date key to the note text shown that day.
pub struct DailyCache {
    storage: Arc<dyn KeyValueStorage>,
}

impl DailyCache {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    fn storage_key(key: &DateKey) -> String {
        format!("{KEY_PREFIX}{key}")
    }

    /// Look up the note stored for a day. No mutation.
    pub fn get(&self, key: &DateKey) -> Result<Option<String>> {
        self.storage.get(&Self::storage_key(key))
    }

    /// Read-through access with at-most-once write.
    ///
    /// Returns the stored note when the key exists, without invoking
    /// `compute`. On a miss, invokes `compute` exactly once and commits its
    /// result through the atomic absent-only write, so a concurrent caller
    /// racing on the same missing key cannot produce a second write, and
    /// both callers observe whichever value landed first.
    pub fn get_or_create(
        &self,
        key: &DateKey,
        compute: impl FnOnce() -> Result<String>,
    ) -> Result<String> {
        let existing = match self.get(key) {
            Ok(existing) => existing,
            Err(err) => {
                warn!(key = %key, error = %err, "cache read failed, treating day as unseen");
                None
            }
        };
        if let Some(note) = existing {
            return Ok(note);
        }

        let note = compute()?;
        match self.storage.put_if_absent(&Self::storage_key(key), &note) {
            Ok(stored) => Ok(stored),
            Err(err) => {
                warn!(key = %key, error = %err, "cache write failed, returning unpersisted note");
                Ok(note)
            }
        }
    }
}
