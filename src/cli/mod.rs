pub mod history;
pub mod remind;
pub mod today;

use anyhow::{Context, Result};
use std::sync::Arc;

use daynote::config::DaynoteConfig;
use daynote::db;
use daynote::note::content::ContentTable;
use daynote::storage::SqliteStorage;

/// Open the configured database behind the shared storage interface.
pub fn open_storage(config: &DaynoteConfig) -> Result<Arc<SqliteStorage>> {
    let conn = db::open_database(config.resolved_db_path())?;
    Ok(Arc::new(SqliteStorage::new(conn)))
}

/// Load and validate the configured content table.
pub fn load_table(config: &DaynoteConfig) -> Result<ContentTable> {
    ContentTable::load(config.resolved_notes_path()).context("failed to load content table")
}
