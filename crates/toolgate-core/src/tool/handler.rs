//! The asynchronous capability behind a tool.

use async_trait::async_trait;
use std::future::Future;

use super::args::ToolArgs;
use crate::error::HandlerResult;

/// Handler invoked when a tool is executed.
///
/// Implement it on a type for tools with state or configuration, or pass a
/// closure: any `Fn(ToolArgs) -> impl Future<Output = HandlerResult>` is a
/// handler.
///
/// ```rust
/// use serde_json::json;
/// use toolgate_core::{HandlerResult, ToolArgs, ToolHandler};
///
/// let greet = |args: ToolArgs| async move {
///     let name = args.require_str("name")?;
///     HandlerResult::Ok(json!(format!("Hello, {name}")))
/// };
///
/// let result = tokio_test::block_on(greet.call(ToolArgs::new().with("name", "Alice")));
/// assert_eq!(result.unwrap(), json!("Hello, Alice"));
/// ```
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Run the tool with the given arguments.
    async fn call(&self, args: ToolArgs) -> HandlerResult;
}

#[async_trait]
impl<F, Fut> ToolHandler for F
where
    F: Fn(ToolArgs) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        (self)(args).await
    }
}
