#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use std::collections::HashMap;

/// Loading flag and last error for one logical operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Per-operation loading/error flags keyed by an operation identifier
/// (e.g. `"chat:ask"`, `"laws:search"`). Not persisted.
///
/// Setting an error ends loading; ending loading clears the error.
#[derive(Clone, Debug, Default)]
pub struct LoadingManager {
    loading: HashMap<String, bool>,
    errors: HashMap<String, Option<String>>,
}

impl LoadingManager {
    pub fn set_loading(&mut self, key: &str, is_loading: bool) {
        self.loading.insert(key.to_owned(), is_loading);
        if !is_loading {
            self.errors.insert(key.to_owned(), None);
        }
    }

    pub fn set_error(&mut self, key: &str, error: Option<String>) {
        if error.is_some() {
            self.loading.insert(key.to_owned(), false);
        }
        self.errors.insert(key.to_owned(), error);
    }

    #[must_use]
    pub fn is_loading(&self, key: &str) -> bool {
        self.loading.get(key).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn state(&self, key: &str) -> LoadingState {
        LoadingState { is_loading: self.is_loading(key), error: self.error(key).map(str::to_owned) }
    }

    pub fn clear(&mut self, key: &str) {
        self.loading.remove(key);
        self.errors.remove(key);
    }

    pub fn clear_all(&mut self) {
        self.loading.clear();
        self.errors.clear();
    }
}
