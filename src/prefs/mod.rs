//! UI preferences with explicit load and save boundaries.
//!
//! Preferences live in a [`PreferenceStore`] handed to whoever needs them.
//! Nothing reads storage implicitly: callers `load` once when the desktop
//! starts and `save` when a preference changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{MatchError, Result};

/// Screen position of the dark-mode toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Persisted UI preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub toggle_position: Position,
}

impl Preferences {
    /// Load from `store`, falling back to defaults when nothing is saved.
    pub fn load_or_default<S: PreferenceStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(store.load()?.unwrap_or_default())
    }

    /// Flip dark mode and return the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}

/// Where preferences are kept between sessions.
pub trait PreferenceStore {
    /// Saved preferences, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<Preferences>>;

    /// Persist `prefs`, replacing whatever was saved.
    fn save(&mut self, prefs: &Preferences) -> Result<()>;
}

/// Volatile store, mainly for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    saved: Option<Preferences>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<Preferences>> {
        Ok(self.saved)
    }

    fn save(&mut self, prefs: &Preferences) -> Result<()> {
        self.saved = Some(*prefs);
        Ok(())
    }
}

/// Pretty-printed JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> Result<Option<Preferences>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&text).map(Some).map_err(|err| {
            tracing::warn!(path = %self.path.display(), %err, "unreadable preferences file");
            MatchError::Preferences(format!("{}: {err}", self.path.display()))
        })
    }

    fn save(&mut self, prefs: &Preferences) -> Result<()> {
        let json = serde_json::to_string_pretty(prefs)
            .map_err(|err| MatchError::Preferences(err.to_string()))?;
        std::fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(Preferences::load_or_default(&store).unwrap(), Preferences::default());

        let mut prefs = Preferences::default();
        assert!(prefs.toggle_dark_mode());
        prefs.toggle_position = Position::new(12.0, 40.5);
        store.save(&prefs).unwrap();

        assert_eq!(store.load().unwrap(), Some(prefs));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{ "dark_mode": true }"#).unwrap();
        assert!(prefs.dark_mode);
        assert_eq!(prefs.toggle_position, Position::default());
    }
}
