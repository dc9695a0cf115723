//! Error Types
//!
//! Two failure families exist around tools:
//! - `tool`: registry-level errors (lookup, strict validation, bad names)
//! - `handler`: failures raised by a tool's own handler
//!
//! A handler failure reaches the caller as [`ToolError::HandlerFailure`]
//! wrapping the handler's exact [`HandlerError`]; its `Display` is the
//! handler's message with nothing added.

mod handler;
mod tool;

pub use handler::{HandlerError, HandlerResult};
pub use tool::{ToolError, ToolResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::{IdValidationError, ToolId};

    #[test]
    fn test_not_found_message_names_tool() {
        let error = ToolError::not_found("nonexistent");

        assert!(error.is_not_found());
        assert_eq!(error.tool_name(), Some("nonexistent"));
        assert_eq!(error.to_string(), "Tool 'nonexistent' not found");
    }

    #[test]
    fn test_handler_failure_is_transparent() {
        let handler_error = HandlerError::new("This operation was designed to fail");
        let error: ToolError = handler_error.clone().into();

        assert!(!error.is_not_found());
        assert_eq!(error.handler_error(), Some(&handler_error));
        assert_eq!(error.to_string(), "This operation was designed to fail");
    }

    #[test]
    fn test_argument_helpers() {
        assert_eq!(
            HandlerError::missing_argument("name").to_string(),
            "missing required argument 'name'"
        );
        assert_eq!(
            HandlerError::invalid_argument("data", "an array of numbers").message(),
            "argument 'data' must be an array of numbers"
        );
    }

    #[test]
    fn test_invalid_arguments_display() {
        let error = ToolError::invalid_arguments("greet", "missing required parameter 'name'");

        assert_eq!(error.tool_name(), Some("greet"));
        assert!(error.to_string().contains("greet"));
        assert!(error.to_string().contains("missing required parameter 'name'"));
    }

    #[test]
    fn test_invalid_tool_id_keeps_source() {
        let source = ToolId::parse("bad name").unwrap_err();
        let error = ToolError::InvalidToolId {
            attempted_name: "bad name".to_string(),
            source: source.clone(),
        };

        assert_eq!(source, IdValidationError::InvalidCharacters);
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().starts_with("Invalid tool ID 'bad name'"));
    }
}
