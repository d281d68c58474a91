//! Preference store integration tests.

use memory_match::core::MatchError;
use memory_match::prefs::{JsonFileStore, PreferenceStore, Position, Preferences};

/// A missing file loads as defaults.
#[test]
fn test_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("prefs.json"));

    assert_eq!(store.load().unwrap(), None);
    assert_eq!(Preferences::load_or_default(&store).unwrap(), Preferences::default());
}

/// Saved preferences come back on the next load.
#[test]
fn test_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let mut store = JsonFileStore::new(&path);

    let mut prefs = Preferences::default();
    prefs.toggle_dark_mode();
    prefs.toggle_position = Position::new(320.0, 18.0);
    store.save(&prefs).unwrap();

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.load().unwrap(), Some(prefs));

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"dark_mode\": true"));
}

/// A corrupt file is reported, not silently replaced.
#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{ dark_mode: ").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(store.load(), Err(MatchError::Preferences(_))));
}

/// Saving into a missing directory surfaces the I/O error.
#[test]
fn test_save_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("nope").join("prefs.json"));

    assert!(matches!(store.save(&Preferences::default()), Err(MatchError::Io(_))));
}
