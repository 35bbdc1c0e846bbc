//! Configuration and user settings.
//!
//! [`Config`] is the immutable process configuration, loaded once from
//! environment variables. [`Settings`] is the small set of mutable user
//! preferences, persisted as JSON in the data directory: loaded at startup,
//! saved on change, and passed by reference into whatever consumes them.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_DIR`: Path to the data directory (defaults to ~/Documents/daybook)
//! - `HOME`: Used for expanding the default data directory path

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Number of selectable color themes.
pub const THEME_COUNT: usize = 5;

/// Immutable process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the database, settings file and exports.
    pub data_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Reads `DAYBOOK_DIR` (expanded with `shellexpand`, so `~` and embedded
    /// environment variables work), falling back to `~/Documents/daybook`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// path is empty.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var("DAYBOOK_DIR").unwrap_or_else(|_| {
            let home = env::var("HOME").unwrap_or_else(|_| "".to_string());
            format!("{}/Documents/daybook", home)
        });

        let expanded = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty or not
    /// absolute.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// Path of the SQLite database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("daybook.db")
    }

    /// Path of the persisted settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    /// Creates the data directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_data_dir(&self) -> AppResult<()> {
        if !self.data_dir.exists() {
            debug!("Creating data directory {}", self.data_dir.display());
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }
}

/// Mutable user preferences, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether event reminders are scheduled at all.
    pub reminders_enabled: bool,
    /// Index into the light-mode theme palette, `0..THEME_COUNT`.
    pub theme_index: usize,
    /// BCP-47-ish language tag for display formatting.
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            reminders_enabled: false,
            theme_index: 0,
            locale: "en".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("Invalid settings file: {}", e)))?;

        if settings.theme_index >= THEME_COUNT {
            return Err(AppError::Config(format!(
                "Theme index {} out of range (0..{})",
                settings.theme_index, THEME_COUNT
            )));
        }

        Ok(settings)
    }

    /// Persists the settings to `path` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize settings: {}", e)))?;
        fs::write(path, raw)?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }
}
