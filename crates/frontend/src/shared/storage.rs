//! Best-effort key-value storage for UI preferences.
//!
//! Values are stored as JSON. Failures are logged and turned into the default
//! value or `false`; they never reach the caller as errors.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

pub const SIDEBAR_OPEN_KEY: &str = "sidebarOpen";
pub const EMPLOYEE_VIEW_MODE_KEY: &str = "employees.viewMode";
pub const LAST_PAGE_KEY: &str = "lastPage";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser storage is not available")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("stored value is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, with every key namespaced by `prefix`
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    prefix: String,
}

impl BrowserStorage {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}.{}", self.prefix, key)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(&self.full_key(key))
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(&self.full_key(key), value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(&self.full_key(key))
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// In-process store, used off the browser
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose writes and removals always fail, like a full or locked storage
    pub fn read_only() -> Self {
        Self {
            items: RefCell::new(HashMap::new()),
            fail_writes: true,
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Access("quota exceeded".to_string()));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Access("storage is read-only".to_string()));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

fn read<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    match store.get_item(key)? {
        Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

/// Stored value for `key`, or `default` when it is missing or unreadable
pub fn get_from_storage<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str, default: T) -> T {
    match read(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            log::error!("Error reading '{}' from storage: {}", key, e);
            default
        }
    }
}

/// Returns `true` when the value was written
pub fn set_to_storage<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> bool {
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|json| store.set_item(key, &json));
    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("Error writing '{}' to storage: {}", key, e);
            false
        }
    }
}

/// Returns `true` when the key was removed or was not there
pub fn remove_from_storage(store: &impl KeyValueStore, key: &str) -> bool {
    match store.remove_item(key) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Error removing '{}' from storage: {}", key, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let store = MemoryStorage::new();
        assert!(set_to_storage(&store, SIDEBAR_OPEN_KEY, &false));
        assert!(!get_from_storage(&store, SIDEBAR_OPEN_KEY, true));
        assert_eq!(store.get_item(SIDEBAR_OPEN_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_missing_key_gives_default() {
        let store = MemoryStorage::new();
        assert_eq!(get_from_storage(&store, LAST_PAGE_KEY, "dashboard".to_string()), "dashboard");
    }

    #[test]
    fn test_corrupt_value_gives_default() {
        let store = MemoryStorage::new();
        store.set_item(EMPLOYEE_VIEW_MODE_KEY, "{not json").unwrap();
        assert_eq!(get_from_storage(&store, EMPLOYEE_VIEW_MODE_KEY, 7_u32), 7);
    }

    #[test]
    fn test_failed_writes_return_false() {
        let store = MemoryStorage::read_only();
        assert!(!set_to_storage(&store, SIDEBAR_OPEN_KEY, &true));
        assert!(!remove_from_storage(&store, SIDEBAR_OPEN_KEY));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove() {
        let store = MemoryStorage::new();
        set_to_storage(&store, LAST_PAGE_KEY, &"teams");
        assert_eq!(store.len(), 1);
        assert!(remove_from_storage(&store, LAST_PAGE_KEY));
        assert!(remove_from_storage(&store, LAST_PAGE_KEY));
        assert!(store.is_empty());
    }
}
