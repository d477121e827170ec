//! In-memory key-value store for testing.
//!
//! Clones share the same backing map, so a test can hand one clone to a
//! theme store and inspect or "reload" through another.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{KeyValueStore, StorageError};

/// In-memory key-value store with injectable failures.
///
/// # Example
///
/// ```
/// use folio::adapters::mock::InMemoryStore;
/// use folio::traits::KeyValueStore;
///
/// let store = InMemoryStore::new();
/// let mut writer = store.clone();
/// writer.set("theme", "dark").unwrap();
///
/// // The original handle sees the write
/// assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
///
/// // Simulate blocked storage
/// store.set_set_should_fail(true);
/// assert!(writer.set("theme", "light").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    /// Whether get should fail
    get_should_fail: Arc<Mutex<bool>>,
    /// Whether set and remove should fail
    set_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial entries.
    pub fn with_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(map)),
            ..Self::default()
        }
    }

    /// Configure whether get should fail.
    pub fn set_get_should_fail(&self, should_fail: bool) {
        *self.get_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether set and remove should fail.
    pub fn set_set_should_fail(&self, should_fail: bool) {
        *self.set_should_fail.lock().unwrap() = should_fail;
    }

    /// Snapshot of the stored entries (for assertions).
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.lock().unwrap().clone()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if *self.get_should_fail.lock().unwrap() {
            return Err(StorageError::ReadFailed("Mock read failure".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.set_should_fail.lock().unwrap() {
            return Err(StorageError::Unavailable("Mock storage blocked".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if *self.set_should_fail.lock().unwrap() {
            return Err(StorageError::Unavailable("Mock storage blocked".to_string()));
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.snapshot().is_empty());
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = InMemoryStore::new();
        let mut other = store.clone();
        other.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        other.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_injected_failures() {
        let mut store = InMemoryStore::with_entries([("theme", "light")]);
        store.set_get_should_fail(true);
        store.set_set_should_fail(true);

        assert!(matches!(store.get("theme"), Err(StorageError::ReadFailed(_))));
        assert!(matches!(
            store.set("theme", "dark"),
            Err(StorageError::Unavailable(_))
        ));
        assert!(store.remove("theme").is_err());
        assert_eq!(store.snapshot().get("theme").map(String::as_str), Some("light"));
    }
}
