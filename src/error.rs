//! Error types.
//!
//! Re-exports the error types of the tool and completion layers so callers
//! can match on them from one place.

pub use toolgate_core::error::{HandlerError, HandlerResult, ToolError, ToolResult};
pub use toolgate_core::identifiers::IdValidationError;
pub use toolgate_core::tool::SchemaError;
pub use toolgate_llm::error::{CompletionError, CompletionResult};
