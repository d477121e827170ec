//! File-backed key-value store.
//!
//! Stores a flat JSON object of string values in
//! `~/.folio/preferences.json`. Every write rewrites the file before
//! returning, so a process started right after a write reads the new value.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::traits::{KeyValueStore, StorageError};

/// The preferences directory name.
pub const PREFERENCES_DIR: &str = ".folio";

/// The preferences file name.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Key-value store persisted as a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Path to the preferences file.
    path: PathBuf,
}

impl FileStore {
    /// Create a store at the default location under the home directory.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::at(home.join(PREFERENCES_DIR).join(PREFERENCES_FILE)))
    }

    /// Create a store backed by `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the preferences file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(StorageError::ReadFailed(err.to_string())),
        };

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|err| StorageError::Corrupt(err.to_string()))
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        // Ensure the parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)
            .map_err(|err| StorageError::WriteFailed(err.to_string()))?;
        writer.flush()?;
        Ok(())
    }

    /// Load for a read-modify-write. A corrupt file is replaced rather than
    /// blocking writes forever.
    fn load_for_update(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.load() {
            Err(StorageError::Corrupt(reason)) => {
                tracing::warn!(path = %self.path.display(), "Replacing corrupt preferences: {}", reason);
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load_for_update()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
