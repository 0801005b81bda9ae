//! Timestamps and identifiers for locally created records.

use chrono::{DateTime, Utc};

/// Current wall-clock time in UTC.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Fresh random identifier for client-created messages.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
