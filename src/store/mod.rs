//! Durable key-value storage and the stores built on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`KeyValueStore`] wraps the host's synchronous per-origin storage
//! (`window.localStorage` in the browser). Favorites and feedback receive an
//! injected `Arc<dyn KeyValueStore>` instead of touching the browser
//! directly, so tests swap in [`MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! Adapters report failures as [`StorageError`]. Call sites catch and log
//! them: storage is best-effort and a failed write never breaks the UI
//! (private browsing, quota exhaustion, corrupt values).


pub mod favorites;
pub mod feedback;
#[cfg(test)]
pub(crate) mod test_helpers;

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors produced by storage adapters and JSON helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The host offers no storage (not a browser, or storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The host refused the read or write (e.g. quota exceeded).
    #[error("storage access failed for {key}: {reason}")]
    Access { key: String, reason: String },

    /// The stored value is not valid JSON for the expected type.
    #[error("stored value for {key} is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// The value could not be encoded as JSON.
    #[error("value for {key} could not be encoded: {reason}")]
    Encode { key: String, reason: String },
}

/// Synchronous string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for `key`, `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the host storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the host storage rejects the write.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Decode the JSON value stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] when the stored text does not parse,
/// or the adapter's error when the read fails.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.load(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt { key: key.to_owned(), reason: e.to_string() })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] when serialization fails, or the
/// adapter's error when the write fails.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Encode { key: key.to_owned(), reason: e.to_string() })?;
    store.save(key, &raw)
}

/// In-process storage for tests and hosts without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `window.localStorage`.
///
/// The `Storage` handle is looked up on every call rather than held, which
/// keeps the adapter `Send + Sync` for Leptos contexts.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
        window
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
    }
}

impl KeyValueStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?
                .get_item(key)
                .map_err(|e| StorageError::Access { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("localStorage requires a browser".to_owned()))
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Access { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable("localStorage requires a browser".to_owned()))
        }
    }
}
