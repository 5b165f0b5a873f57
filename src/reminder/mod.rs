//! Daily reminder scheduling.
//!
//! Provides the [`ReminderTrigger`] specification, the
//! [`NotificationBackend`] trait over whatever actually delivers
//! notifications, and [`schedule_daily`], the idempotent install path.
//! Delivery timing is the backend's concern; this module only guarantees
//! the trigger specification handed to it.

pub mod local;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use local::StorageBackend;

/// Fixed identifier of the singleton daily trigger.
pub const REMINDER_IDENTIFIER: &str = "daily_note";

/// Notification content shown when the trigger fires.
pub const REMINDER_TITLE: &str = "Today's Note";
pub const REMINDER_BODY: &str = "Your daily note is ready.";

/// A repeating daily notification trigger specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderTrigger {
    pub identifier: String,
    /// Local fire time.
    pub hour: u32,
    pub minute: u32,
    pub repeats: bool,
    pub title: String,
    pub body: String,
}

impl ReminderTrigger {
    /// The daily trigger firing at the given local time.
    pub fn daily(hour: u32, minute: u32) -> Self {
        Self {
            identifier: REMINDER_IDENTIFIER.into(),
            hour,
            minute,
            repeats: true,
            title: REMINDER_TITLE.into(),
            body: REMINDER_BODY.into(),
        }
    }
}

/// The notification-delivery collaborator.
///
/// Implementations hold the authorization state and the set of pending
/// triggers. [`StorageBackend`] records both in local storage; an OS
/// integration would forward to its notification center.
pub trait NotificationBackend: Send + Sync {
    /// Whether the upstream permission grant has been confirmed.
    fn authorization_granted(&self) -> Result<bool>;

    /// Remove every pending trigger with the given identifier.
    fn clear_pending(&self, identifier: &str) -> Result<()>;

    /// Install a trigger.
    fn install(&self, trigger: &ReminderTrigger) -> Result<()>;
}

/// (Re)install the single daily trigger.
///
/// Replace semantics, not add semantics: any pending trigger under the
/// fixed identifier is cleared before the new one is installed, so calling
/// this any number of times leaves exactly one active trigger. Returns
/// `Ok(false)` without touching the backend when authorization has not
/// been granted; scheduling never precedes a confirmed grant.
pub fn schedule_daily(
    backend: &dyn NotificationBackend,
    hour: u32,
    minute: u32,
) -> Result<bool> {
    anyhow::ensure!(hour < 24, "reminder hour must be in 0..=23, got {hour}");
    anyhow::ensure!(minute < 60, "reminder minute must be in 0..=59, got {minute}");

    if !backend.authorization_granted()? {
        debug!("notification permission not granted, skipping reminder scheduling");
        return Ok(false);
    }

    backend.clear_pending(REMINDER_IDENTIFIER)?;

    let trigger = ReminderTrigger::daily(hour, minute);
    backend.install(&trigger)?;

    info!(hour, minute, "daily reminder scheduled");
    Ok(true)
}
