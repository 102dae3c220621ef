//! Settings persistence system
//!
//! Saves and loads [`GameSettings`] to/from a JSON file. Provides persistence of user
//! preferences across runs.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the user's configuration directory (for example
//! `~/.config/dama/settings.json` on Linux). When the platform has no such directory the file
//! lives in the working directory instead. Callers may also pass an explicit path.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a warning
//! - Save failures are returned to the caller

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::core::error::{CoreError, CoreResult};
use crate::core::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// The per-user configuration directory for Dama.
pub fn config_dir() -> CoreResult<PathBuf> {
    ProjectDirs::from("com", "trilltino", "Dama")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(CoreError::MissingConfigDir)
}

/// Helper to resolve the settings file path
///
/// Returns `settings.json` in [`config_dir`], or in the working directory when there is none.
pub fn settings_path() -> PathBuf {
    match config_dir() {
        Ok(dir) => dir.join(SETTINGS_FILENAME),
        Err(e) => {
            warn!("[SETTINGS] {}. Using ./{}", e, SETTINGS_FILENAME);
            PathBuf::from(SETTINGS_FILENAME)
        }
    }
}

/// Read and parse a settings file.
pub fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

/// Load settings from `path` (or the default location)
///
/// A missing file is normal on first run and yields the defaults. An unreadable or malformed
/// file is logged and also yields the defaults.
pub fn load_settings(path: Option<&Path>) -> GameSettings {
    let settings_path = path.map_or_else(settings_path, Path::to_path_buf);

    if !settings_path.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            settings_path
        );
        return GameSettings::default();
    }

    match read_settings(&settings_path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", settings_path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                settings_path, e
            );
            GameSettings::default()
        }
    }
}

/// Save settings to `path` (or the default location), creating parent directories.
///
/// Returns the path written.
pub fn save_settings(settings: &GameSettings, path: Option<&Path>) -> CoreResult<PathBuf> {
    let settings_path = path.map_or_else(settings_path, Path::to_path_buf);

    if let Some(parent) = settings_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&settings_path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", settings_path);
    Ok(settings_path)
}
