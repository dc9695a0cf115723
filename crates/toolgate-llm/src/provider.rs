//! The completion provider boundary.

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use crate::error::CompletionResult;
use crate::types::{ChatRequest, ChatResponse, CompletionRequest, CompletionResponse, ModelInfo};

/// Finite stream of text fragments from a streaming completion.
///
/// Fragments arrive in order and concatenate to the full completion. The
/// stream ends after the last fragment or the first error, and cannot be
/// restarted.
pub type CompletionStream = Pin<Box<dyn Stream<Item = CompletionResult<String>> + Send>>;

/// A hosted (or simulated) AI completion service.
///
/// Providers are passed explicitly to the code that needs them; there is no
/// process-wide client.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// Multi-turn chat completion.
    async fn chat(&self, request: ChatRequest) -> CompletionResult<ChatResponse>;

    /// Single-prompt completion, sent as a one-message chat.
    async fn complete(&self, request: CompletionRequest) -> CompletionResult<CompletionResponse> {
        self.chat(request.into()).await.map(CompletionResponse::from)
    }

    /// Single-prompt completion delivered incrementally.
    async fn complete_stream(&self, request: CompletionRequest)
    -> CompletionResult<CompletionStream>;

    /// Models the provider offers.
    async fn list_models(&self) -> CompletionResult<Vec<ModelInfo>>;
}
