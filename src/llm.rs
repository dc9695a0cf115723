//! # Completion Module
//!
//! Text and chat completions behind one trait.
//!
//! - **[CompletionProvider]**: list models, complete, chat, stream
//! - **[HttpCompletionProvider]**: OpenAI-compatible HTTP API
//! - **[MockCompletionProvider]**: deterministic offline stand-in
//! - **[ProviderConfig]**: API key, base URL, default model, timeout

pub use toolgate_llm::{
    ChatMessage, ChatRequest, ChatResponse, CompletionProvider, CompletionRequest,
    CompletionResponse, CompletionStream, DEFAULT_CHAT_MODEL, DEFAULT_COMPLETION_MODEL,
    HttpCompletionProvider, MockCompletionProvider, ModelInfo, ProviderConfig, Role, Usage,
};
