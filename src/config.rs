use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DaynoteConfig {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub content: ContentConfig,
    pub reminder: ReminderConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ContentConfig {
    pub notes_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ReminderConfig {
    pub hour: u32,
    pub minute: u32,
}

impl Default for DaynoteConfig {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            storage: StorageConfig::default(),
            content: ContentConfig::default(),
            reminder: ReminderConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_daynote_dir()
            .join("daynote.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        let notes_path = default_daynote_dir()
            .join("notes.toml")
            .to_string_lossy()
            .into_owned();
        Self { notes_path }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

/// Returns `~/.daynote/`
pub fn default_daynote_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".daynote")
}

/// Returns the default config file path: `~/.daynote/config.toml`
pub fn default_config_path() -> PathBuf {
    default_daynote_dir().join("config.toml")
}

impl DaynoteConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            DaynoteConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (DAYNOTE_DB, DAYNOTE_NOTES, DAYNOTE_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DAYNOTE_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("DAYNOTE_NOTES") {
            self.content.notes_path = val;
        }
        if let Ok(val) = std::env::var("DAYNOTE_LOG_LEVEL") {
            self.app.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    /// Resolve the content table path, expanding `~` if needed.
    pub fn resolved_notes_path(&self) -> PathBuf {
        expand_tilde(&self.content.notes_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
