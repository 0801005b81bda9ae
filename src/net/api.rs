//! HTTP client for the answering service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, bounded by the
//! configured timeout and aborted through an `AbortController` as soon as
//! the call future is dropped.
//! Elsewhere: calls fail with [`ApiError::RequestConstruction`] since fetch
//! only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; the variant already carries the
//! failure class so the session never inspects raw transport errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{ChatRequest, ChatResponse, CreateConversationRequest};
use crate::config::ApiConfig;
use crate::state::chat::Message;

pub const CHAT_PATH: &str = "/api/chat/";
pub const LAWS_PATH: &str = "/api/laws";
pub const LAW_SEARCH_PATH: &str = "/api/laws/search";
pub const CONVERSATIONS_PATH: &str = "/api/conversations";

fn law_path(law_id: &str) -> String {
    format!("{LAWS_PATH}/{law_id}")
}

fn conversation_path(conversation_id: &str) -> String {
    format!("{CONVERSATIONS_PATH}/{conversation_id}")
}

fn conversation_messages_path(conversation_id: &str) -> String {
    format!("{CONVERSATIONS_PATH}/{conversation_id}/messages")
}

/// Sends one question to the answering service and yields the answer.
///
/// Futures are `?Send`: browser fetch futures are bound to the JS thread.
/// Implementors must stay cancel-safe, since the session drops the future
/// of a superseded call.
#[async_trait(?Send)]
pub trait AnswerClient: Send + Sync {
    async fn send_question(&self, question: &str, conversation_id: Option<&str>) -> Result<Message, ApiError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// `gloo-net` backed client for the chat, law, and conversation endpoints.
#[derive(Clone, Debug, Default)]
pub struct HttpAnswerClient {
    config: ApiConfig,
}

impl HttpAnswerClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /api/laws/search?keyword=`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] when the call fails.
    pub async fn search_laws(&self, keyword: &str) -> Result<serde_json::Value, ApiError> {
        self.execute(HttpMethod::Get, LAW_SEARCH_PATH, &[("keyword", keyword)], None).await
    }

    /// `GET /api/laws`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] when the call fails.
    pub async fn list_laws(&self) -> Result<serde_json::Value, ApiError> {
        self.execute(HttpMethod::Get, LAWS_PATH, &[], None).await
    }

    /// `GET /api/laws/{law_id}`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] when the call fails.
    pub async fn get_law(&self, law_id: &str) -> Result<serde_json::Value, ApiError> {
        self.execute(HttpMethod::Get, &law_path(law_id), &[], None).await
    }

    /// `POST /api/conversations`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] when the call fails.
    pub async fn create_conversation(&self, title: Option<&str>) -> Result<serde_json::Value, ApiError> {
        let payload = CreateConversationRequest { title: title.map(str::to_owned) };
        let body = encode_body(&payload)?;
        self.execute(HttpMethod::Post, CONVERSATIONS_PATH, &[], Some(body)).await
    }

    /// `GET /api/conversations`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] when the call fails.
    pub async fn list_conversations(&self) -> Result<serde_json::Value, ApiError> {
        self.execute(HttpMethod::Get, CONVERSATIONS_PATH, &[], None).await
    }

    /// `GET /api/conversations/{conversation_id}/messages`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] when the call fails.
    pub async fn conversation_messages(&self, conversation_id: &str) -> Result<serde_json::Value, ApiError> {
        self.execute(HttpMethod::Get, &conversation_messages_path(conversation_id), &[], None)
            .await
    }

    /// `DELETE /api/conversations/{conversation_id}`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] when the call fails.
    pub async fn delete_conversation(&self, conversation_id: &str) -> Result<serde_json::Value, ApiError> {
        self.execute(HttpMethod::Delete, &conversation_path(conversation_id), &[], None)
            .await
    }

    #[cfg(feature = "csr")]
    async fn execute<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, &str)],
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        use futures::future::{Either, select};
        use gloo_net::http::{Method, RequestBuilder};

        let controller = web_sys::AbortController::new()
            .map_err(|_| ApiError::RequestConstruction("AbortController unavailable".to_owned()))?;
        let _abort = AbortOnDrop(controller.clone());

        let method = match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        };
        let builder = RequestBuilder::new(&self.config.endpoint(path))
            .method(method)
            .query(query.iter().copied())
            .abort_signal(Some(&controller.signal()));
        let request = match body {
            Some(body) => builder.json(&body)?,
            None => builder.build()?,
        };

        let timeout_ms = self.config.timeout_ms();
        let send = Box::pin(request.send());
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms));
        let response = match select(send, timeout).await {
            Either::Left((result, _)) => result.inspect_err(|e| log::warn!("network error on {path}: {e}"))?,
            Either::Right(((), _)) => {
                log::warn!("request to {path} timed out after {timeout_ms} ms");
                return Err(ApiError::Timeout(timeout_ms));
            }
        };

        if !response.ok() {
            let status = response.status();
            let raw = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &raw);
            log::warn!("API error [{status}] on {path}: {}", err.user_message());
            return Err(err);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    #[cfg(not(feature = "csr"))]
    async fn execute<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, &str)],
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let _ = (method, query, body);
        Err(ApiError::RequestConstruction(format!("{path}: not available outside the browser")))
    }
}

#[async_trait(?Send)]
impl AnswerClient for HttpAnswerClient {
    async fn send_question(&self, question: &str, conversation_id: Option<&str>) -> Result<Message, ApiError> {
        let payload = ChatRequest { message: question.to_owned(), conversation_id: conversation_id.map(str::to_owned) };
        let body = encode_body(&payload)?;
        let response: ChatResponse = self.execute(HttpMethod::Post, CHAT_PATH, &[], Some(body)).await?;
        Ok(response.into_message())
    }
}

fn encode_body<T: serde::Serialize>(payload: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::RequestConstruction(e.to_string()))
}

/// Aborts the underlying fetch when the owning call future is dropped.
#[cfg(feature = "csr")]
struct AbortOnDrop(web_sys::AbortController);

#[cfg(feature = "csr")]
impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}
