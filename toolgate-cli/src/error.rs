use thiserror::Error;
use toolgate_core::{HandlerError, ToolError};
use toolgate_llm::CompletionError;

/// Errors that end a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("Invalid --args JSON: {0}")]
    InvalidArgsJson(#[from] serde_json::Error),

    #[error("Invalid --args: {0}")]
    InvalidArgs(HandlerError),

    #[error("Tool '{tool}' returned unexpected output: {detail}")]
    UnexpectedOutput { tool: String, detail: String },
}

impl CliError {
    pub fn unexpected_output(tool: &str, detail: impl Into<String>) -> Self {
        Self::UnexpectedOutput {
            tool: tool.to_string(),
            detail: detail.into(),
        }
    }
}
