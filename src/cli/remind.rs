use anyhow::Result;

use daynote::config::DaynoteConfig;
use daynote::reminder::{
    schedule_daily, NotificationBackend, StorageBackend, REMINDER_IDENTIFIER,
};

/// Record the notification grant, then install the daily trigger.
pub fn enable(config: &DaynoteConfig, hour: Option<u32>, minute: Option<u32>) -> Result<()> {
    let storage = super::open_storage(config)?;
    let backend = StorageBackend::new(storage);

    let hour = hour.unwrap_or(config.reminder.hour);
    let minute = minute.unwrap_or(config.reminder.minute);

    backend.grant()?;
    let scheduled = schedule_daily(&backend, hour, minute)?;

    if scheduled {
        println!("Daily reminder scheduled for {hour:02}:{minute:02}.");
    } else {
        println!("Notification permission not granted; reminder skipped.");
    }
    Ok(())
}

/// Revoke the grant and remove any pending trigger.
pub fn disable(config: &DaynoteConfig) -> Result<()> {
    let storage = super::open_storage(config)?;
    let backend = StorageBackend::new(storage);

    backend.revoke()?;
    backend.clear_pending(REMINDER_IDENTIFIER)?;

    println!("Daily reminder disabled.");
    Ok(())
}

/// Show the grant state and the pending trigger.
pub fn status(config: &DaynoteConfig) -> Result<()> {
    let storage = super::open_storage(config)?;
    let backend = StorageBackend::new(storage);

    let granted = backend.authorization_granted()?;
    println!(
        "Permission: {}",
        if granted { "granted" } else { "not granted" }
    );

    match backend.pending()? {
        Some(trigger) => {
            println!(
                "Pending trigger: {} at {:02}:{:02} (repeats: {})",
                trigger.identifier, trigger.hour, trigger.minute, trigger.repeats
            );
            println!("  {}: {}", trigger.title, trigger.body);
        }
        None => println!("Pending trigger: none"),
    }
    Ok(())
}
