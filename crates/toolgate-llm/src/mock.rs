//! Offline completion provider.
//!
//! Behaves like the remote service for the cases the demos exercise: it
//! rejects unknown models and known-bad keys with the same error kinds, and
//! streams its answers fragment by fragment. Replies are deterministic.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::error::{CompletionError, CompletionResult};
use crate::provider::{CompletionProvider, CompletionStream};
use crate::types::{
    ChatMessage, ChatRequest, ChatResponse, CompletionRequest, ModelInfo, Usage,
    DEFAULT_CHAT_MODEL, DEFAULT_COMPLETION_MODEL,
};

/// Key the mock rejects out of the box.
pub const INVALID_API_KEY: &str = "invalid-key";

const EXCERPT_CHARS: usize = 60;

/// Deterministic in-process stand-in for a completion API.
///
/// ```rust
/// use toolgate_llm::{CompletionProvider, CompletionRequest, MockCompletionProvider};
///
/// let provider = MockCompletionProvider::new().with_reply("Paris");
/// let response = tokio_test::block_on(
///     provider.complete(CompletionRequest::new("Capital of France?")),
/// )
/// .unwrap();
/// assert_eq!(response.text, "Paris");
/// ```
#[derive(Debug, Clone)]
pub struct MockCompletionProvider {
    api_key: String,
    models: Vec<ModelInfo>,
    invalid_keys: HashSet<String>,
    reply: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl Default for MockCompletionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletionProvider {
    pub fn new() -> Self {
        Self {
            api_key: "mock-key".to_string(),
            models: vec![
                ModelInfo::new(DEFAULT_COMPLETION_MODEL).with_name("GPT-3.5 Turbo"),
                ModelInfo::new(DEFAULT_CHAT_MODEL).with_name("GPT-4"),
            ],
            invalid_keys: HashSet::from([INVALID_API_KEY.to_string()]),
            reply: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Use this key for every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Add a key the provider rejects with an authentication error.
    pub fn with_invalid_key(mut self, api_key: impl Into<String>) -> Self {
        self.invalid_keys.insert(api_key.into());
        self
    }

    /// Offer an extra model.
    pub fn with_model(mut self, model: ModelInfo) -> Self {
        self.models.push(model);
        self
    }

    /// Answer every request with `reply`.
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = Some(reply.into());
        self
    }

    /// Last user message of every accepted request, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    fn check(&self, model: &str) -> CompletionResult<()> {
        if self.invalid_keys.contains(&self.api_key) {
            return Err(CompletionError::authentication("Invalid API key provided"));
        }
        if !self.models.iter().any(|m| m.id == model) {
            return Err(CompletionError::unknown_model(model));
        }
        Ok(())
    }

    fn record(&self, prompt: &str) {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
    }

    fn reply_for(&self, model: &str, prompt: &str) -> String {
        if let Some(reply) = &self.reply {
            return reply.clone();
        }

        let prompt = prompt.split_whitespace().collect::<Vec<_>>().join(" ");
        let excerpt: String = prompt.chars().take(EXCERPT_CHARS).collect();
        let ellipsis = if prompt.chars().count() > EXCERPT_CHARS {
            "..."
        } else {
            ""
        };
        format!("This is a simulated {model} response to: \"{excerpt}{ellipsis}\"")
    }
}

fn word_count(text: &str) -> u32 {
    u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX)
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn chat(&self, request: ChatRequest) -> CompletionResult<ChatResponse> {
        self.check(&request.model)?;

        let prompt = request.last_user_content().unwrap_or_default();
        self.record(prompt);
        let text = self.reply_for(&request.model, prompt);

        let prompt_tokens: u32 = request.messages.iter().map(|m| word_count(&m.content)).sum();
        let completion_tokens = word_count(&text);

        Ok(ChatResponse {
            message: ChatMessage::assistant(text),
            model: request.model,
            usage: Some(Usage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            }),
            finish_reason: Some("stop".to_string()),
        })
    }

    async fn complete_stream(
        &self,
        request: CompletionRequest,
    ) -> CompletionResult<CompletionStream> {
        self.check(&request.model)?;
        self.record(&request.prompt);

        let text = self.reply_for(&request.model, &request.prompt);
        let fragments: Vec<CompletionResult<String>> = text
            .split_inclusive(' ')
            .map(|fragment| Ok(fragment.to_string()))
            .collect();

        Ok(Box::pin(futures::stream::iter(fragments)))
    }

    async fn list_models(&self) -> CompletionResult<Vec<ModelInfo>> {
        if self.invalid_keys.contains(&self.api_key) {
            return Err(CompletionError::authentication("Invalid API key provided"));
        }
        Ok(self.models.clone())
    }
}
