use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Theme, UserPreferences};

const PREFS_FILE: &str = "prefs.json";
const THEME_FILE: &str = "theme.json";

/// Durable profile state: two JSON documents under one directory, one for
/// user preferences and one for the selected theme.
///
/// Loads never fail: absent or malformed content falls back to the default
/// value. Saves report I/O errors to the caller.
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn prefs_path(&self) -> PathBuf {
        self.root.join(PREFS_FILE)
    }

    pub fn theme_path(&self) -> PathBuf {
        self.root.join(THEME_FILE)
    }

    /// Load preferences, substituting the empty default on any failure.
    pub fn load_prefs(&self) -> UserPreferences {
        load_or_default(&self.prefs_path())
    }

    pub fn save_prefs(&self, prefs: &UserPreferences) -> Result<()> {
        self.write_json(&self.prefs_path(), prefs)
    }

    /// Load the theme, substituting the default on any failure.
    pub fn load_theme(&self) -> Theme {
        load_or_default(&self.theme_path())
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.write_json(&self.theme_path(), &theme)
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn load_or_default<T>(path: &Path) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default()
}
