//! Storage fakes shared by store tests.

use std::sync::Mutex;

use super::{KeyValueStore, MemoryStore, StorageError};

/// Storage that rejects every read and write, like disabled `localStorage`.
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".to_owned()))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".to_owned()))
    }
}

/// Storage that can be switched to reject writes, like a quota-exceeded
/// `localStorage`, or to reject reads, like a transient `SecurityError`.
#[derive(Default)]
pub struct QuotaStore {
    inner: MemoryStore,
    full: Mutex<bool>,
    unreadable: Mutex<bool>,
}

impl QuotaStore {
    pub fn set_full(&self, full: bool) {
        *self.full.lock().unwrap() = full;
    }

    pub fn set_unreadable(&self, unreadable: bool) {
        *self.unreadable.lock().unwrap() = unreadable;
    }
}

impl KeyValueStore for QuotaStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if *self.unreadable.lock().unwrap() {
            return Err(StorageError::Access { key: key.to_owned(), reason: "SecurityError".to_owned() });
        }
        self.inner.load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.full.lock().unwrap() {
            return Err(StorageError::Access { key: key.to_owned(), reason: "QuotaExceededError".to_owned() });
        }
        self.inner.save(key, value)
    }
}
