//! Process-lifetime key-value store.
//!
//! Used when there is no data directory to persist into. Values live until
//! the process exits.

use std::collections::HashMap;

use crate::traits::{KeyValueStore, StorageError};

/// Key-value store that never touches the disk.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::FixedAppearance;
    use crate::engine::{ThemeMode, ThemePreferenceStore, ThemeSource};

    #[test]
    fn test_set_get_remove() {
        let mut store = SessionStore::new();
        assert_eq!(store.get("theme").unwrap(), None);

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_theme_toggles_for_the_session() {
        let mut theme = ThemePreferenceStore::new(SessionStore::new(), FixedAppearance::light());
        theme.init();

        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.source(), ThemeSource::UserOverride);
        assert_eq!(theme.reset_to_system(), ThemeMode::Light);
    }
}
