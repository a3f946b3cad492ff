// Theme preference persistence.
// One value, read once at startup and written on every toggle. Stored as
// JSON in the platform config directory, written atomically.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Color scheme preference. Dark unless the user explicitly chose light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: ThemeMode,
}

/// Path to the preferences file (~/.config/gitfolio on Linux).
pub fn prefs_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gitfolio").map(|dirs| dirs.config_dir().join("preferences.json"))
}

/// Load preferences; a missing or unreadable file means the defaults.
pub fn load(path: &Path) -> Preferences {
    fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str(&contents).ok())
        .unwrap_or_default()
}

/// Write preferences atomically via temp file + rename.
pub fn store(path: &Path, preferences: &Preferences) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(preferences)?;
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");

        let preferences = Preferences {
            theme: ThemeMode::Light,
        };
        store(&path, &preferences).unwrap();

        assert_eq!(load(&path).theme, ThemeMode::Light);
    }

    #[test]
    fn test_missing_file_defaults_to_dark() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert_eq!(load(&path).theme, ThemeMode::Dark);
    }

    #[test]
    fn test_corrupt_file_defaults_to_dark() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(load(&path).theme, ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_flips_mode() {
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
    }
}
