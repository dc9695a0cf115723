//! # Toolgate LLM
//!
//! The boundary between application code and a hosted AI completion API.
//!
//! - [`CompletionProvider`]: completions, chat, streaming and model listing
//! - [`HttpCompletionProvider`]: OpenAI-compatible HTTP client (`reqwest`)
//! - [`MockCompletionProvider`]: deterministic offline stand-in
//! - [`ProviderConfig`]: credentials and endpoint from TOML and environment
//!
//! ## Choosing a provider
//!
//! ```rust
//! use std::sync::Arc;
//! use toolgate_llm::{CompletionProvider, HttpCompletionProvider, MockCompletionProvider, ProviderConfig};
//!
//! let config = ProviderConfig::default();
//! let provider: Arc<dyn CompletionProvider> = if config.has_usable_credential() {
//!     Arc::new(HttpCompletionProvider::new(&config).unwrap())
//! } else {
//!     Arc::new(MockCompletionProvider::new())
//! };
//! assert_eq!(provider.name(), "mock");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod provider;
pub mod types;

pub use config::ProviderConfig;
pub use error::{CompletionError, CompletionResult};
pub use http::HttpCompletionProvider;
pub use mock::MockCompletionProvider;
pub use provider::{CompletionProvider, CompletionStream};
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, CompletionRequest, CompletionResponse, ModelInfo,
    Role, Usage, DEFAULT_CHAT_MODEL, DEFAULT_COMPLETION_MODEL,
};
