// Celebrity List - App Settings
// Small JSON settings file at ~/.celebrity-list/settings.json.
// A missing file means defaults; an unreadable one is logged and ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    APP_DIR, DEFAULT_DATA_FILE, DEFAULT_LOG_LEVEL, DEFAULT_THEME, SETTINGS_FILENAME,
    SETTINGS_VERSION,
};
use crate::error::{CelebrityError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub version: u32,
    /// Path of the celebrity document; None uses the bundled/default file
    pub data_source: Option<String>,
    pub log_level: String,
    pub theme: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            data_source: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl AppSettings {
    /// Document path to use, preferring an explicit override
    pub fn resolve_data_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.data_source.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// `log` level filter for the configured level name (unknown names mean info)
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Path to the settings file: ~/.celebrity-list/settings.json
pub fn get_settings_path() -> Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| CelebrityError::Settings("Could not determine home directory".to_string()))?;
    Ok(home.home_dir().join(APP_DIR).join(SETTINGS_FILENAME))
}

/// Read settings from `path`. Missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<AppSettings> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let contents = std::fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

/// Settings from the default location, falling back to defaults on any error
pub fn load_settings() -> AppSettings {
    let (settings, warning) = read_settings();
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }
    settings
}

/// Like `load_settings`, but hands the failure back instead of logging it.
/// Used before a logger exists.
pub fn read_settings() -> (AppSettings, Option<String>) {
    or_defaults(get_settings_path().and_then(|path| load_settings_from(&path)))
}

fn or_defaults(loaded: Result<AppSettings>) -> (AppSettings, Option<String>) {
    match loaded {
        Ok(settings) => (settings, None),
        Err(e) => (
            AppSettings::default(),
            Some(format!("Failed to read settings, using defaults: {}", e)),
        ),
    }
}

/// Write settings to `path`, creating the parent directory
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;
    Ok(())
}
