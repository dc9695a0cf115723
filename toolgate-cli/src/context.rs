//! Shared state for demo runs: one registry, one provider, one configuration.

use std::path::Path;
use std::sync::Arc;

use toolgate_llm::mock::INVALID_API_KEY;
use toolgate_llm::{
    CompletionProvider, CompletionRequest, HttpCompletionProvider, MockCompletionProvider,
    ProviderConfig,
};
use toolgate_tools::InMemoryToolRegistry;
use tracing::info;

use crate::error::CliError;

pub struct DemoContext {
    pub registry: InMemoryToolRegistry,
    pub provider: Arc<dyn CompletionProvider>,
    pub config: ProviderConfig,
    live: bool,
}

impl DemoContext {
    /// Load configuration and pick a provider.
    ///
    /// The HTTP provider is used only when a real credential is configured
    /// and `offline` is not set; otherwise the mock stands in.
    pub fn from_options(config_path: Option<&Path>, offline: bool) -> Result<Self, CliError> {
        let config = match config_path {
            Some(path) => ProviderConfig::from_file(path)?,
            None => ProviderConfig::from_env(),
        };

        if !offline && config.has_usable_credential() {
            let provider = HttpCompletionProvider::new(&config)?;
            info!(base_url = %provider.base_url(), "Using HTTP completion provider");
            Ok(Self::with_provider(config, Arc::new(provider), true))
        } else {
            info!(offline, "Using offline completion provider");
            Ok(Self::with_provider(
                config,
                Arc::new(MockCompletionProvider::new()),
                false,
            ))
        }
    }

    pub fn with_provider(
        config: ProviderConfig,
        provider: Arc<dyn CompletionProvider>,
        live: bool,
    ) -> Self {
        Self {
            registry: InMemoryToolRegistry::new(),
            provider,
            config,
            live,
        }
    }

    /// Context with default configuration and the mock provider.
    pub fn offline() -> Self {
        Self::with_provider(
            ProviderConfig::default(),
            Arc::new(MockCompletionProvider::new()),
            false,
        )
    }

    /// Whether a real-looking API key is configured.
    pub fn has_credential(&self) -> bool {
        self.config.has_usable_credential()
    }

    /// Completion request for `prompt` on the configured default model.
    pub fn completion(&self, prompt: impl Into<String>) -> CompletionRequest {
        CompletionRequest::new(prompt).with_model(&self.config.default_model)
    }

    /// A provider of the same kind as the active one, holding a bad key.
    pub fn invalid_key_provider(&self) -> Result<Arc<dyn CompletionProvider>, CliError> {
        if self.live {
            let config = self.config.clone().with_api_key(INVALID_API_KEY);
            Ok(Arc::new(HttpCompletionProvider::new(&config)?))
        } else {
            Ok(Arc::new(
                MockCompletionProvider::new().with_api_key(INVALID_API_KEY),
            ))
        }
    }
}
