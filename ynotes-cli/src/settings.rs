//! Application settings persistence for Y-Notes.
//!
//! Stores user preferences (currently the notes file location) in a JSON
//! file at an OS-appropriate location.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use ynotes_core::Result;

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// File the notes document is read from and written to.
    pub notes_file: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            notes_file: default_notes_file().to_string_lossy().to_string(),
        }
    }
}

const APP_DIR: &str = "ynotes";
const SETTINGS_FILE: &str = "settings.json";
const NOTES_DIR: &str = "YNotes";
const NOTES_FILE: &str = "notes.json";

/// Returns `ynotes/settings.json` under the platform config directory
/// (`$XDG_CONFIG_HOME` or `~/.config` on Linux, `%APPDATA%` on Windows).
pub fn settings_file_path() -> PathBuf {
    config_base().join(APP_DIR).join(SETTINGS_FILE)
}

fn config_base() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_default()
}

/// Returns the default notes file, `YNotes/notes.json` in the user's documents.
pub fn default_notes_file() -> PathBuf {
    let documents = dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .unwrap_or_default();
    documents.join(NOTES_DIR).join(NOTES_FILE)
}

/// Loads settings from `path`; returns defaults if the file is missing or corrupt.
pub fn load_settings_from(path: &Path) -> AppSettings {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable settings file {}: {e}", path.display());
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Loads settings from [`settings_file_path`].
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_file_path())
}

/// Saves settings to `path`, creating parent directories as needed.
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Saves settings to [`settings_file_path`].
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    save_settings_to(&settings_file_path(), settings)
}

/// Picks the notes file: an explicit `--file`/`YNOTES_FILE` wins over settings.
pub fn resolve_notes_file(explicit: Option<&Path>, settings: &AppSettings) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&settings.notes_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_use_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json"));
        assert_eq!(settings, AppSettings::default());
        assert!(settings.notes_file.ends_with("notes.json"));
    }

    #[test]
    fn test_corrupt_settings_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{{{").unwrap();

        assert_eq!(load_settings_from(&path), AppSettings::default());
    }

    #[test]
    fn test_settings_round_trip_in_camel_case() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfg").join("settings.json");
        let settings = AppSettings {
            notes_file: "/tmp/my-notes.json".to_string(),
        };

        save_settings_to(&path, &settings).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"notesFile\""));
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_default_locations() {
        assert!(settings_file_path().ends_with(Path::new("ynotes").join("settings.json")));
        assert!(default_notes_file().ends_with(Path::new("YNotes").join("notes.json")));
    }

    #[test]
    fn test_explicit_file_wins() {
        let settings = AppSettings {
            notes_file: "/from/settings.json".to_string(),
        };

        let chosen = resolve_notes_file(Some(Path::new("/explicit.json")), &settings);
        assert_eq!(chosen, PathBuf::from("/explicit.json"));

        let fallback = resolve_notes_file(None, &settings);
        assert_eq!(fallback, PathBuf::from("/from/settings.json"));
    }
}
