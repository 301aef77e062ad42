// ============================================================================
// ERRORS - What can go wrong talking to the backend or handling the session
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport failure (backend unreachable, CORS, aborted request)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the body's `error` field when it has one
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    /// Session token could not be decoded, or has expired
    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    /// Rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Text shown to the user. Server and validation messages are surfaced
    /// verbatim, everything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}
