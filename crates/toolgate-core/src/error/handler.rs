//! Failures raised inside tool handlers.

use thiserror::Error;

/// Error produced by a tool handler.
///
/// Handlers report failures with a human-readable message only. The registry
/// hands this value back to the caller exactly as the handler produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    /// Create a handler error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// A required argument was absent from the invocation.
    pub fn missing_argument(name: &str) -> Self {
        Self::new(format!("missing required argument '{name}'"))
    }

    /// An argument was present but had the wrong shape.
    pub fn invalid_argument(name: &str, expected: &str) -> Self {
        Self::new(format!("argument '{name}' must be {expected}"))
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("serialization error: {err}"))
    }
}

/// Result type returned by tool handlers.
pub type HandlerResult = Result<serde_json::Value, HandlerError>;
