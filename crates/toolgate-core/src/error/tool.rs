//! Tool lookup and dispatch errors.

use thiserror::Error;

use super::handler::HandlerError;
use crate::identifiers::IdValidationError;

/// Errors returned by registry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// No tool is registered under the requested name.
    #[error("Tool '{name}' not found")]
    NotFound {
        /// The name the caller asked for, verbatim
        name: String,
    },

    /// The tool's handler failed. The inner error is the handler's own value.
    #[error(transparent)]
    HandlerFailure(#[from] HandlerError),

    /// Arguments were rejected by the tool's schema (strict validation only).
    #[error("Tool '{tool}' received invalid arguments: {reason}")]
    InvalidArguments {
        /// Tool that rejected the arguments
        tool: String,
        /// Why the arguments were rejected
        reason: String,
    },

    /// A tool name failed validation at registration time.
    #[error("Invalid tool ID '{attempted_name}': {source}")]
    InvalidToolId {
        /// The rejected name
        attempted_name: String,
        /// Validation failure details
        #[source]
        source: IdValidationError,
    },
}

impl ToolError {
    /// Create a NotFound error for the requested name.
    pub fn not_found(name: impl Into<String>) -> Self {
        ToolError::NotFound { name: name.into() }
    }

    /// Create an InvalidArguments error.
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        ToolError::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the tool was not registered.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ToolError::NotFound { .. })
    }

    /// The handler's error, if the handler is what failed.
    pub fn handler_error(&self) -> Option<&HandlerError> {
        match self {
            ToolError::HandlerFailure(err) => Some(err),
            _ => None,
        }
    }

    /// The tool name this error refers to, when one is known.
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            ToolError::NotFound { name } => Some(name),
            ToolError::InvalidArguments { tool, .. } => Some(tool),
            ToolError::HandlerFailure(_) | ToolError::InvalidToolId { .. } => None,
        }
    }
}

/// Result type alias for registry operations.
pub type ToolResult<T> = Result<T, ToolError>;
