//! Answering-service and local-storage configuration.
//!
//! A WASM bundle has no process environment, so the backend URL is captured
//! with `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// `localStorage` key holding saved favorite messages.
pub const FAVORITES_KEY: &str = "lawchat_favorites";
/// `localStorage` key holding the append-only feedback log.
pub const FEEDBACK_KEY: &str = "lawchat_feedback";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin without a trailing slash.
    pub base_url: String,
    /// Ceiling applied to every request; a generated answer can take a while.
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `LAWCHAT_BACKEND_URL`: default `http://localhost:8000`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_base_url(option_env!("LAWCHAT_BACKEND_URL"))
    }

    /// Build config from an optional raw base URL, falling back to the default
    /// when it is missing or blank.
    #[must_use]
    pub fn from_base_url(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url, request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS) }
    }

    /// Absolute URL for an API path such as `/api/chat/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Request timeout in whole milliseconds, saturating at `u32::MAX` for browser timers.
    #[must_use]
    pub fn timeout_ms(&self) -> u32 {
        u32::try_from(self.request_timeout.as_millis()).unwrap_or(u32::MAX)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
