// ============================================================================
// STORAGE - Durable key/value persistence for the stores
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{AppError, AppResult};

/// Synchronous key/value surface (localStorage in the browser).
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

pub type SharedStorage = Rc<dyn KeyValueStorage>;

/// In-memory storage. Used in tests and as the fallback when the browser
/// refuses to hand out localStorage.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// localStorage through gloo-storage.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    /// gloo-storage panics when localStorage is missing (private mode on
    /// some browsers), so check through web-sys first.
    pub fn is_available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .is_some()
    }

    fn ensure_available() -> AppResult<()> {
        if Self::is_available() {
            Ok(())
        } else {
            Err(AppError::Storage("localStorage is not available".to_string()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        use gloo_storage::{errors::StorageError, LocalStorage, Storage};

        Self::ensure_available()?;
        match LocalStorage::get::<serde_json::Value>(key) {
            Ok(value) => Ok(Some(value.to_string())),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(AppError::Storage(e.to_string())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        use gloo_storage::{LocalStorage, Storage};

        Self::ensure_available()?;
        let json: serde_json::Value = serde_json::from_str(value)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        LocalStorage::set(key, json).map_err(|e| AppError::Storage(e.to_string()))
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        use gloo_storage::{LocalStorage, Storage};

        Self::ensure_available()?;
        LocalStorage::delete(key);
        Ok(())
    }
}

pub fn save_to_storage<T: Serialize>(storage: &dyn KeyValueStorage, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value).map_err(|e| AppError::Serialization(e.to_string()))?;
    storage.set_item(key, &json)
}

/// `Ok(None)` when nothing is stored under `key`.
pub fn load_from_storage<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> AppResult<Option<T>> {
    match storage.get_item(key)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| AppError::Serialization(format!("{}: {}", key, e))),
        None => Ok(None),
    }
}

pub fn remove_from_storage(storage: &dyn KeyValueStorage, key: &str) -> AppResult<()> {
    storage.remove_item(key)
}
