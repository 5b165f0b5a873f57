//! Storage-backed notification backend.
//!
//! Records the permission grant and the pending trigger in the same local
//! store as everything else. The grant lives under `notifications.granted`
//! and is set by an upstream prompt flow (the CLI's `remind enable`);
//! the pending trigger is serialized JSON under `reminder.<identifier>`.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::reminder::{NotificationBackend, ReminderTrigger, REMINDER_IDENTIFIER};
use crate::storage::KeyValueStorage;

const GRANT_KEY: &str = "notifications.granted";

fn trigger_key(identifier: &str) -> String {
    format!("reminder.{identifier}")
}

/// Local [`NotificationBackend`] persisting trigger state in key-value storage.
pub struct StorageBackend {
    storage: Arc<dyn KeyValueStorage>,
}

impl StorageBackend {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Record that notification permission was granted.
    pub fn grant(&self) -> Result<()> {
        self.storage.set(GRANT_KEY, "true")
    }

    /// Record that notification permission was revoked.
    pub fn revoke(&self) -> Result<()> {
        self.storage.set(GRANT_KEY, "false")
    }

    /// The pending daily trigger, if one is installed.
    pub fn pending(&self) -> Result<Option<ReminderTrigger>> {
        let raw = self.storage.get(&trigger_key(REMINDER_IDENTIFIER))?;
        raw.map(|json| {
            serde_json::from_str(&json).context("failed to parse stored reminder trigger")
        })
        .transpose()
    }
}

impl NotificationBackend for StorageBackend {
    fn authorization_granted(&self) -> Result<bool> {
        Ok(self.storage.get(GRANT_KEY)?.as_deref() == Some("true"))
    }

    fn clear_pending(&self, identifier: &str) -> Result<()> {
        self.storage.remove(&trigger_key(identifier))
    }

    fn install(&self, trigger: &ReminderTrigger) -> Result<()> {
        let json =
            serde_json::to_string(trigger).context("failed to serialize reminder trigger")?;
        self.storage.set(&trigger_key(&trigger.identifier), &json)
    }
}
