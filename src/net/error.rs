//! Failure classification for answering-service calls.
//!
//! ERROR HANDLING
//! ==============
//! Every transport or server failure is normalized here into [`ApiError`], a
//! closed enumeration. Callers switch on the variant (or just call
//! [`ApiError::user_message`]) instead of probing an unstructured error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

pub const SERVER_ERROR_MESSAGE: &str = "서버 오류가 발생했습니다.";
pub const NETWORK_UNAVAILABLE_MESSAGE: &str = "서버에 연결할 수 없습니다. 네트워크를 확인해주세요.";
pub const REQUEST_FAILED_MESSAGE: &str = "요청을 처리하는 중 오류가 발생했습니다.";
pub const ANSWER_FALLBACK_MESSAGE: &str = "답변을 가져오는 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

/// Errors produced by answering-service calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server responded with an error status.
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },

    /// The request was sent but no response arrived.
    #[error("no response from server: {0}")]
    NetworkUnavailable(String),

    /// No response arrived within the request timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u32),

    /// The request could not be built or issued.
    #[error("request could not be sent: {0}")]
    RequestConstruction(String),

    /// A success response whose body did not match the wire schema.
    #[error("response body could not be decoded: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Server { status, message: ErrorBody::parse(body).message() }
    }

    /// Text shown to the user as the assistant's reply.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { message: Some(message), .. } => message.clone(),
            Self::Server { message: None, .. } => SERVER_ERROR_MESSAGE.to_owned(),
            Self::NetworkUnavailable(_) | Self::Timeout(_) => NETWORK_UNAVAILABLE_MESSAGE.to_owned(),
            Self::RequestConstruction(_) => REQUEST_FAILED_MESSAGE.to_owned(),
            Self::InvalidResponse(_) => ANSWER_FALLBACK_MESSAGE.to_owned(),
        }
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            // fetch rejects with a TypeError when the server is unreachable.
            gloo_net::Error::JsError(js) => Self::NetworkUnavailable(js.to_string()),
            gloo_net::Error::SerdeError(e) => Self::InvalidResponse(e.to_string()),
            gloo_net::Error::GlooError(msg) => Self::RequestConstruction(msg),
        }
    }
}
