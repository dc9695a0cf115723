//! Completion provider error types.

use thiserror::Error;

/// Result type for completion operations
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Errors a completion provider can report.
///
/// Callers decide what to do with them: the demos log some and substitute
/// fallback text for others. Nothing here is retried automatically.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The credential was missing, malformed or rejected
    #[error("Authentication failed: {reason}")]
    Authentication { reason: String },

    /// The requested model does not exist
    #[error("Unknown model: {model}")]
    UnknownModel { model: String },

    /// Any other error reported by the API
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Provider settings are unusable
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CompletionError {
    pub fn authentication(reason: impl Into<String>) -> Self {
        Self::Authentication {
            reason: reason.into(),
        }
    }

    pub fn unknown_model(model: impl Into<String>) -> Self {
        Self::UnknownModel {
            model: model.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the provider rejected the credential.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    pub fn is_unknown_model(&self) -> bool {
        matches!(self, Self::UnknownModel { .. })
    }
}

impl From<url::ParseError> for CompletionError {
    fn from(err: url::ParseError) -> Self {
        Self::configuration(format!("Invalid base URL: {err}"))
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}
