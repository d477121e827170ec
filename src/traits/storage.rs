//! Key-value persistence trait abstraction.
//!
//! Durable per-user storage of small string values. The engine uses a single
//! key for the theme override.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// Storage is disabled, blocked or has no backing location
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Failed to read the backing store
    #[error("failed to read storage: {0}")]
    ReadFailed(String),
    /// Failed to write the backing store
    #[error("failed to write storage: {0}")]
    WriteFailed(String),
    /// The backing store exists but could not be decoded
    #[error("storage is corrupt: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::WriteFailed(err.to_string())
    }
}

/// Trait for durable string storage.
///
/// Writes are synchronous: a value passed to [`KeyValueStore::set`] is
/// visible to any store opened on the same backing location as soon as the
/// call returns.
///
/// # Example
///
/// ```
/// use folio::adapters::mock::InMemoryStore;
/// use folio::traits::KeyValueStore;
///
/// let mut store = InMemoryStore::new();
/// assert_eq!(store.get("theme").unwrap(), None);
///
/// store.set("theme", "dark").unwrap();
/// assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
/// ```
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if a value is stored
    /// - `Ok(None)` if the key is absent
    /// - `Err(error)` if the store could not be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
