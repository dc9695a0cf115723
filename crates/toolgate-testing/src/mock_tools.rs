//! # Mock Tools for Testing
//!
//! Tool handlers with scripted results and call tracking, for exercising
//! registries without real tool logic.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use toolgate_core::{
    HandlerError, HandlerResult, ParameterSchema, ToolArgs, ToolDescriptor, ToolHandler, ToolId,
};

/// A mock tool that returns scripted results for matching arguments.
///
/// Clones share their call tracking, so a test can keep one clone for
/// inspection after registering another.
#[derive(Debug, Clone)]
pub struct MockTool {
    name: String,
    responses: Vec<(ToolArgs, HandlerResult)>,
    default_response: Option<HandlerResult>,
    call_count: Arc<Mutex<usize>>,
    call_history: Arc<Mutex<Vec<ToolArgs>>>,
}

impl MockTool {
    /// Create a new mock tool with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: Vec::new(),
            default_response: None,
            call_count: Arc::new(Mutex::new(0)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Return `response` when called with exactly `args`
    pub fn with_response(mut self, args: ToolArgs, response: impl Into<Value>) -> Self {
        self.responses.push((args, Ok(response.into())));
        self
    }

    /// Fail with `error` when called with exactly `args`
    pub fn with_failure(mut self, args: ToolArgs, error: impl Into<String>) -> Self {
        self.responses.push((args, Err(HandlerError::new(error))));
        self
    }

    /// Result for any unmatched arguments
    pub fn with_default_response(mut self, response: impl Into<Value>) -> Self {
        self.default_response = Some(Ok(response.into()));
        self
    }

    /// Failure for any unmatched arguments
    pub fn with_default_failure(mut self, error: impl Into<String>) -> Self {
        self.default_response = Some(Err(HandlerError::new(error)));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptor that dispatches to this mock. Call tracking is shared.
    ///
    /// # Panics
    ///
    /// Panics if the mock's name is not a valid tool name.
    pub fn descriptor(&self) -> ToolDescriptor {
        let id = ToolId::parse(&self.name).expect("Valid tool name");
        ToolDescriptor::new(id, ParameterSchema::empty(), self.clone())
            .with_description(format!("Mock tool '{}'", self.name))
    }

    /// Get the number of times this tool has been called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Get the arguments of every call, oldest first
    pub fn call_history(&self) -> Vec<ToolArgs> {
        self.call_history.lock().unwrap().clone()
    }

    /// Reset call count and history
    pub fn reset(&self) {
        *self.call_count.lock().unwrap() = 0;
        self.call_history.lock().unwrap().clear();
    }

    /// Check if the tool was called with specific arguments
    pub fn was_called_with(&self, args: &ToolArgs) -> bool {
        self.call_history.lock().unwrap().contains(args)
    }
}

#[async_trait]
impl ToolHandler for MockTool {
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        *self.call_count.lock().unwrap() += 1;
        self.call_history.lock().unwrap().push(args.clone());

        if let Some((_, response)) = self.responses.iter().find(|(expected, _)| *expected == args) {
            response.clone()
        } else if let Some(default) = &self.default_response {
            default.clone()
        } else {
            Ok(json!({ "mock": self.name, "arguments": args.into_value() }))
        }
    }
}

/// Shared record of the order in which tools finished.
#[derive(Debug, Clone, Default)]
pub struct CompletionLog(Arc<Mutex<Vec<String>>>);

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, label: impl Into<String>) {
        self.0.lock().unwrap().push(label.into());
    }

    /// Labels in completion order.
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// A tool that sleeps before answering with its label.
///
/// Useful for checking that concurrent dispatch returns results in launch
/// order while the tools themselves finish in a different order.
#[derive(Debug, Clone)]
pub struct DelayedTool {
    label: String,
    delay: Duration,
    log: CompletionLog,
}

impl DelayedTool {
    pub fn new(label: impl Into<String>, delay: Duration, log: CompletionLog) -> Self {
        Self {
            label: label.into(),
            delay,
            log,
        }
    }

    /// Descriptor registered under the tool's label.
    ///
    /// # Panics
    ///
    /// Panics if the label is not a valid tool name.
    pub fn descriptor(&self) -> ToolDescriptor {
        let id = ToolId::parse(&self.label).expect("Valid tool name");
        ToolDescriptor::new(id, ParameterSchema::empty(), self.clone())
    }
}

#[async_trait]
impl ToolHandler for DelayedTool {
    async fn call(&self, _args: ToolArgs) -> HandlerResult {
        tokio::time::sleep(self.delay).await;
        self.log.record(&self.label);
        Ok(json!(self.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolgate_tools::{InMemoryToolRegistry, ToolError, ToolRegistry};

    #[tokio::test]
    async fn mock_tool_scripted_responses() {
        let mock = MockTool::new("lookup")
            .with_response(ToolArgs::new().with("key", "a"), "alpha")
            .with_failure(ToolArgs::new().with("key", "b"), "no such key")
            .with_default_response("fallback");

        assert_eq!(
            mock.call(ToolArgs::new().with("key", "a")).await.unwrap(),
            json!("alpha")
        );
        assert_eq!(
            mock.call(ToolArgs::new().with("key", "b"))
                .await
                .unwrap_err()
                .message(),
            "no such key"
        );
        assert_eq!(mock.call(ToolArgs::new()).await.unwrap(), json!("fallback"));
        assert_eq!(mock.call_count(), 3);
        assert!(mock.was_called_with(&ToolArgs::new().with("key", "a")));
    }

    #[tokio::test]
    async fn mock_tool_tracks_calls_through_registry() {
        let mock = MockTool::new("tracked").with_default_failure("always fails");
        let registry = InMemoryToolRegistry::new().with_tool(mock.descriptor());

        let err = registry.execute("tracked", ToolArgs::new()).await.unwrap_err();
        assert!(matches!(err, ToolError::HandlerFailure(_)));
        assert_eq!(mock.call_count(), 1);

        mock.reset();
        assert_eq!(mock.call_count(), 0);
        assert!(mock.call_history().is_empty());
    }

    #[tokio::test]
    async fn delayed_tool_records_completion() {
        let log = CompletionLog::new();
        let tool = DelayedTool::new("slow", Duration::from_millis(5), log.clone());

        assert_eq!(tool.call(ToolArgs::new()).await.unwrap(), json!("slow"));
        assert_eq!(log.entries(), vec!["slow".to_string()]);
    }
}
