//! Azure-specific error types.

use thiserror::Error;

/// Errors from the Azure management layer.
#[derive(Debug, Error)]
pub enum AzureError {
    /// Failed to obtain a management-plane token.
    #[error("failed to obtain Azure credential: {0}")]
    Credential(String),

    /// Transport-level HTTP failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The management API rejected the request.
    #[error("Azure API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// A long-running operation reached a non-success terminal state.
    #[error("operation ended with status {status}: {message}")]
    Operation { status: String, message: String },

    /// Unexpected response payload.
    #[error("unexpected response: {0}")]
    Json(#[from] serde_json::Error),
}

impl AzureError {
    /// Create a credential error.
    pub fn credential(msg: impl Into<String>) -> Self {
        Self::Credential(msg.into())
    }

    /// Create an operation error.
    pub fn operation(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Operation {
            status: status.into(),
            message: message.into(),
        }
    }
}
