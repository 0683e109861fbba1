//! Error types for the LLM layer

use thiserror::Error;

/// Errors that can occur when calling a completion provider
#[derive(Debug, Error)]
pub enum LlmError {
    /// Authentication/API key issues
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// HTTP request failures
    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The provider returned a response with no usable text
    #[error("Empty completion from provider")]
    EmptyCompletion,
}

// Implement conversion from common error types
impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LlmError::Http {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            LlmError::Http {
                status: 0,
                body: err.to_string(),
            }
        }
    }
}
