//! Wire-protocol DTOs for the answering service.
//!
//! DESIGN
//! ======
//! These types mirror the service's snake_case JSON exactly; conversion into
//! the camelCase message model happens here so nothing else sees wire names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::chat::{LawReference, Message, Role};
use crate::util::clock;

/// Body of `POST /api/chat/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Success body of `POST /api/chat/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub content: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub law_references: Option<Vec<WireLawReference>>,
}

/// A law reference as the service encodes it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WireLawReference {
    pub law_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub article: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<WireLawReference> for LawReference {
    fn from(wire: WireLawReference) -> Self {
        Self { law_id: wire.law_id, title: wire.title, article: wire.article, url: wire.url }
    }
}

impl ChatResponse {
    /// Convert into an assistant message, stamping it now when the service
    /// sent no timestamp. An empty reference list becomes `None`.
    #[must_use]
    pub fn into_message(self) -> Message {
        let sources = self
            .law_references
            .filter(|refs| !refs.is_empty())
            .map(|refs| refs.into_iter().map(LawReference::from).collect());
        Message {
            id: self.id,
            role: Role::Assistant,
            content: self.content,
            created_at: self.created_at.unwrap_or_else(clock::now),
            sources,
        }
    }
}

/// Accept RFC 3339 timestamps and offset-less ISO ones (read as UTC).
/// Anything else is dropped so the answer is stamped locally instead.
fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    match NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => Ok(Some(naive.and_utc())),
        Err(e) => {
            log::debug!("ignoring unparseable created_at {raw:?}: {e}");
            Ok(None)
        }
    }
}

/// Body of `POST /api/conversations`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateConversationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Optional fields the service puts on error responses.
///
/// `detail` is a plain string for handled errors but a list of objects for
/// request validation failures, so it stays untyped.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Parse an error body, treating anything unparseable as empty.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// The first non-empty of `message` and string `detail`.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let detail = self.detail.as_ref().and_then(serde_json::Value::as_str);
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| detail.filter(|d| !d.is_empty()))
            .map(str::to_owned)
    }
}
