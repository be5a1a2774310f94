//! Local persistence for user preferences (language, theme).
//!
//! Values are plain strings stored under fixed keys. Storage may be missing
//! or disabled (private browsing, sandboxed iframes); callers go through
//! [`load_preference`] / [`save_preference`], which log and swallow those
//! failures so preferences keep working in memory for the session.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::warn;

/// Storage key holding the current language code.
pub const LANGUAGE_KEY: &str = "language";
/// Storage key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("could not write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Origin-scoped string key/value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads a preference, treating an unavailable store as "nothing persisted".
pub fn load_preference(store: &dyn PreferenceStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!("[storage] reading `{key}` failed ({err}); continuing without it");
            None
        }
    }
}

/// Writes a preference; failures are logged and otherwise ignored.
pub fn save_preference(store: &dyn PreferenceStore, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        warn!("[storage] writing `{key}` failed ({err}); keeping value in memory only");
    }
}

/// In-process store used on native targets and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`, resolved on every call so a store that appears or
/// disappears mid-session is handled like any other failure.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?;
        window
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable(format!("reading `{key}` rejected")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded or storage disabled".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FailingStore;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);
        store.set(LANGUAGE_KEY, "en").unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn failing_store_reads_as_empty() {
        assert_eq!(load_preference(&FailingStore, THEME_KEY), None);
        // Must not panic.
        save_preference(&FailingStore, THEME_KEY, "dark");
    }

    #[test]
    fn with_value_seeds_a_single_key() {
        let store = MemoryStore::with_value(THEME_KEY, "dark");
        assert_eq!(load_preference(&store, THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(load_preference(&store, LANGUAGE_KEY), None);
    }
}
