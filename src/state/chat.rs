//! Conversation message model shared by the session, stores, and view.
//!
//! Serialized field names follow the camelCase shape already written to
//! `localStorage` by earlier releases, so saved favorites keep loading.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::clock;

/// Author of a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Assistant,
}

/// A statute citation attached to an assistant answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawReference {
    pub law_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl LawReference {
    /// Citation line shown under an answer: title (or law id) then article.
    #[must_use]
    pub fn label(&self) -> String {
        let name = self.title.as_deref().unwrap_or(&self.law_id);
        match self.article.as_deref() {
            Some(article) if !article.is_empty() => format!("{name} {article}"),
            _ => name.to_owned(),
        }
    }
}

/// A single conversation message. Immutable once appended to a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<LawReference>>,
}

impl Message {
    /// A user-authored message with a fresh client id and the current time.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { id: clock::new_id(), role: Role::User, content: content.into(), created_at: clock::now(), sources: None }
    }

    /// A locally synthesized assistant message, used for failed answers.
    #[must_use]
    pub fn assistant_notice(content: impl Into<String>) -> Self {
        Self {
            id: clock::new_id(),
            role: Role::Assistant,
            content: content.into(),
            created_at: clock::now(),
            sources: None,
        }
    }

    #[must_use]
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }

    /// Citations to render, empty when the answer carried none.
    #[must_use]
    pub fn sources(&self) -> &[LawReference] {
        self.sources.as_deref().unwrap_or_default()
    }
}
