//! Theme preference persistence.
//!
//! One scalar preference, stored as JSON under the user's config
//! directory. Absent or unreadable state falls back to the dark default;
//! writes are synchronous, and callers treat write failures as
//! environment faults (warn and continue).

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Preferences filename within the application directory.
const PREFS_FILENAME: &str = "prefs.json";

/// Application directory name under the platform config dir.
const APP_DIR: &str = "fincalc";

// ============================================================================
// TYPES
// ============================================================================

/// The persisted theme choice. Dark when no preference has been stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, ThemePreference::Light)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemePreference::Light => write!(f, "light"),
            ThemePreference::Dark => write!(f, "dark"),
        }
    }
}

/// On-disk preferences document.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct Prefs {
    theme: ThemePreference,
}

// ============================================================================
// PATHS
// ============================================================================

/// Returns the default preferences file path.
///
/// `<config_dir>/fincalc/prefs.json`, e.g. `~/.config/fincalc/prefs.json`.
pub fn default_prefs_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(PREFS_FILENAME)
}

// ============================================================================
// LOAD / SAVE
// ============================================================================

/// Load the stored theme, defaulting to dark.
///
/// A missing or unparseable file is treated as "no preference yet".
pub fn load_theme(path: &Path) -> ThemePreference {
    let Ok(raw) = fs::read_to_string(path) else {
        return ThemePreference::default();
    };

    match serde_json::from_str::<Prefs>(&raw) {
        Ok(prefs) => prefs.theme,
        Err(e) => {
            tracing::warn!("ignoring malformed preferences at {}: {}", path.display(), e);
            ThemePreference::default()
        }
    }
}

/// Write the theme preference synchronously, creating parent directories.
pub fn save_theme(path: &Path, theme: ThemePreference) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&Prefs { theme }).map_err(io::Error::other)?;
    fs::write(path, json)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        assert_eq!(load_theme(&path), ThemePreference::Dark);
    }

    #[test]
    fn corrupt_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load_theme(&path), ThemePreference::Dark);
    }

    #[test]
    fn theme_round_trips_across_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        save_theme(&path, ThemePreference::Light).unwrap();
        assert_eq!(load_theme(&path), ThemePreference::Light);

        save_theme(&path, ThemePreference::Dark).unwrap();
        assert_eq!(load_theme(&path), ThemePreference::Dark);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.json");

        save_theme(&path, ThemePreference::Light).unwrap();
        assert_eq!(load_theme(&path), ThemePreference::Light);
    }

    #[test]
    fn stored_form_uses_lowercase_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        save_theme(&path, ThemePreference::Light).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"theme\""));
        assert!(raw.contains("\"light\""));
    }

    #[test]
    fn toggled_flips_and_round_trips() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
    }

    #[test]
    fn display_matches_stored_values() {
        assert_eq!(ThemePreference::Light.to_string(), "light");
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }
}
