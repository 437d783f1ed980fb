//! Persisted progress over a durable key-value store.
//!
//! Reads always go to the backend; there is no cache, so a value written by
//! someone else is seen on the next call. Malformed values read as defaults.

use crate::error::StoreError;
use crate::types::Theme;
use std::collections::{BTreeMap, BTreeSet};

/// Key holding the JSON array of incorrectly answered question ids.
pub const INCORRECT_KEY: &str = "fc_incorrectIds";
/// Key holding the last viewed question id.
pub const LAST_CARD_KEY: &str = "fc_lastCardId";
/// Key holding the theme preference.
pub const THEME_KEY: &str = "fc_theme";

type Result<T> = std::result::Result<T, StoreError>;

/// Durable string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store (for testing and ephemeral sessions).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Typed accessors for the incorrect-answer set, last viewed card and theme.
#[derive(Debug)]
pub struct ProgressStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    /// Ids whose most recent answer was wrong. Empty when absent or unreadable.
    pub fn get_incorrect_set(&self) -> BTreeSet<i64> {
        let Some(raw) = self.read(INCORRECT_KEY) else {
            return BTreeSet::new();
        };
        match serde_json::from_str::<Option<Vec<i64>>>(&raw) {
            Ok(ids) => ids.unwrap_or_default().into_iter().collect(),
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", INCORRECT_KEY, e);
                BTreeSet::new()
            }
        }
    }

    pub fn save_incorrect_set(&mut self, ids: &BTreeSet<i64>) -> Result<()> {
        let encoded = serde_json::to_string(ids).map_err(StoreError::backend)?;
        self.backend.set(INCORRECT_KEY, &encoded)
    }

    pub fn add_incorrect(&mut self, id: i64) -> Result<()> {
        let mut ids = self.get_incorrect_set();
        ids.insert(id);
        self.save_incorrect_set(&ids)
    }

    /// Writes only when `id` was present.
    pub fn remove_incorrect(&mut self, id: i64) -> Result<()> {
        let mut ids = self.get_incorrect_set();
        if ids.remove(&id) {
            self.save_incorrect_set(&ids)?;
        }
        Ok(())
    }

    pub fn is_incorrect(&self, id: i64) -> bool {
        self.get_incorrect_set().contains(&id)
    }

    pub fn set_last_card_id(&mut self, id: i64) -> Result<()> {
        self.backend.set(LAST_CARD_KEY, &id.to_string())
    }

    pub fn get_last_card_id(&self) -> Option<i64> {
        let raw = self.read(LAST_CARD_KEY)?;
        match raw.trim().parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!("Ignoring malformed {}: {:?}", LAST_CARD_KEY, raw);
                None
            }
        }
    }

    pub fn has_last_card(&self) -> bool {
        self.get_last_card_id().is_some()
    }

    pub fn get_theme(&self) -> Option<Theme> {
        self.read(THEME_KEY).and_then(|raw| Theme::from_str(&raw))
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.backend.set(THEME_KEY, theme.as_str())
    }

    /// Fail-soft read: backend errors are logged and treated as absence.
    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(StoreError::backend(std::io::Error::new(
                std::io::ErrorKind::Other,
                "unavailable",
            )))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(StoreError::backend(std::io::Error::new(
                std::io::ErrorKind::Other,
                "read-only",
            )))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    fn set_of(ids: &[i64]) -> BTreeSet<i64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn incorrect_set_defaults_to_empty() {
        let store = ProgressStore::new(MemoryStore::new());
        assert!(store.get_incorrect_set().is_empty());
    }

    #[test]
    fn save_then_get_roundtrips() {
        let mut store = ProgressStore::new(MemoryStore::new());
        for ids in [set_of(&[]), set_of(&[1]), set_of(&[-4, 0, 7, 1_000_000])] {
            store.save_incorrect_set(&ids).unwrap();
            assert_eq!(store.get_incorrect_set(), ids);
        }
    }

    #[test]
    fn stored_as_json_array() {
        let mut store = ProgressStore::new(MemoryStore::new());
        store.save_incorrect_set(&set_of(&[3, 1])).unwrap();
        assert_eq!(
            store.backend().get(INCORRECT_KEY).unwrap().as_deref(),
            Some("[1,3]")
        );
    }

    #[test]
    fn malformed_incorrect_set_reads_as_empty() {
        for raw in ["not json", "{\"a\":1}", "[\"x\"]", "[1.5]"] {
            let store = ProgressStore::new(MemoryStore::with_entry(INCORRECT_KEY, raw));
            assert!(store.get_incorrect_set().is_empty(), "value {raw:?}");
        }
    }

    #[test]
    fn null_incorrect_set_reads_as_empty() {
        let store = ProgressStore::new(MemoryStore::with_entry(INCORRECT_KEY, "null"));
        assert!(store.get_incorrect_set().is_empty());
    }

    #[test]
    fn add_and_remove_incorrect() {
        let mut store = ProgressStore::new(MemoryStore::new());
        store.add_incorrect(5).unwrap();
        store.add_incorrect(2).unwrap();
        store.add_incorrect(5).unwrap();
        assert_eq!(store.get_incorrect_set(), set_of(&[2, 5]));
        assert!(store.is_incorrect(5));

        store.remove_incorrect(5).unwrap();
        assert!(!store.is_incorrect(5));
        assert_eq!(store.get_incorrect_set(), set_of(&[2]));
    }

    #[test]
    fn remove_absent_does_not_write() {
        let mut store = ProgressStore::new(MemoryStore::new());
        store.remove_incorrect(9).unwrap();
        assert_eq!(store.backend().get(INCORRECT_KEY).unwrap(), None);
    }

    #[test]
    fn external_writes_are_observed() {
        let mut store = ProgressStore::new(MemoryStore::new());
        store.add_incorrect(1).unwrap();
        store.backend_mut().set(INCORRECT_KEY, "[8]").unwrap();
        assert_eq!(store.get_incorrect_set(), set_of(&[8]));
    }

    #[test]
    fn last_card_id_roundtrip() {
        let mut store = ProgressStore::new(MemoryStore::new());
        assert_eq!(store.get_last_card_id(), None);
        assert!(!store.has_last_card());
        store.set_last_card_id(7).unwrap();
        assert_eq!(store.get_last_card_id(), Some(7));
        store.set_last_card_id(12).unwrap();
        assert_eq!(store.get_last_card_id(), Some(12));
    }

    #[test]
    fn malformed_last_card_id_is_absent() {
        let store = ProgressStore::new(MemoryStore::with_entry(LAST_CARD_KEY, "seven"));
        assert_eq!(store.get_last_card_id(), None);
    }

    #[test]
    fn theme_roundtrip() {
        let mut store = ProgressStore::new(MemoryStore::new());
        assert_eq!(store.get_theme(), None);
        store.set_theme(Theme::Dark).unwrap();
        assert_eq!(store.get_theme(), Some(Theme::Dark));
    }

    #[test]
    fn broken_backend_reads_fail_soft() {
        let mut store = ProgressStore::new(BrokenStore);
        assert!(store.get_incorrect_set().is_empty());
        assert_eq!(store.get_last_card_id(), None);
        assert!(store.add_incorrect(1).is_err());
        // Removing an absent id never touches the backend.
        assert!(store.remove_incorrect(1).is_ok());
    }
}
