//! Theme preference persistence across sessions with the file store.

use std::fs;

use folio::adapters::{FileStore, FixedAppearance, InMemoryStore};
use folio::cli::handle_reset_theme_command;
use folio::engine::{ThemeMode, ThemePreferenceStore, ThemeSource, THEME_STORAGE_KEY};
use folio::startup::Config;
use folio::traits::KeyValueStore;
use tempfile::TempDir;

fn session(path: &std::path::Path, system: FixedAppearance) -> ThemePreferenceStore {
    let mut store = ThemePreferenceStore::new(FileStore::at(path), system);
    store.init();
    store
}

#[test]
fn test_toggle_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");

    let mut first = session(&path, FixedAppearance::light());
    assert_eq!(first.current_mode(), ThemeMode::Light);
    assert_eq!(first.source(), ThemeSource::SystemDefault);
    assert_eq!(first.toggle(), ThemeMode::Dark);
    drop(first);

    let second = session(&path, FixedAppearance::light());
    assert_eq!(second.current_mode(), ThemeMode::Dark);
    assert_eq!(second.source(), ThemeSource::UserOverride);
}

#[test]
fn test_fresh_session_follows_system() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("preferences.json");

    let store = session(&path, FixedAppearance::dark());
    assert!(store.is_dark());
    assert_eq!(store.source(), ThemeSource::SystemDefault);
    assert!(!path.exists());
}

#[test]
fn test_corrupt_file_falls_back_and_is_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{ not json").unwrap();

    let mut store = session(&path, FixedAppearance::light());
    assert_eq!(store.current_mode(), ThemeMode::Light);
    assert_eq!(store.source(), ThemeSource::SystemDefault);

    store.toggle();
    let saved = FileStore::at(&path).get(THEME_STORAGE_KEY).unwrap();
    assert_eq!(saved.as_deref(), Some("dark"));
}

#[test]
fn test_unknown_saved_value_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    FileStore::at(&path).set(THEME_STORAGE_KEY, "sepia").unwrap();

    let store = session(&path, FixedAppearance::dark());
    assert_eq!(store.current_mode(), ThemeMode::Dark);
    assert_eq!(store.source(), ThemeSource::SystemDefault);
}

#[test]
fn test_failed_write_keeps_in_memory_choice() {
    let storage = InMemoryStore::new();
    storage.set_set_should_fail(true);
    let mut store = ThemePreferenceStore::new(storage.clone(), FixedAppearance::light());
    store.init();

    assert_eq!(store.toggle(), ThemeMode::Dark);
    assert_eq!(store.current_mode(), ThemeMode::Dark);
    assert!(storage.snapshot().is_empty());
}

#[test]
fn test_reset_command_clears_saved_theme() {
    let dir = TempDir::new().unwrap();
    let config = Config::default().with_data_dir(dir.path());
    let path = config.preferences_path().unwrap();

    let mut store = session(&path, FixedAppearance::light());
    store.toggle();
    drop(store);

    handle_reset_theme_command(&config).unwrap();

    let store = session(&path, FixedAppearance::light());
    assert_eq!(store.current_mode(), ThemeMode::Light);
    assert_eq!(store.source(), ThemeSource::SystemDefault);
}
