//! Provider configuration
//!
//! Settings come from an optional TOML file and the process environment, in
//! that order, so environment variables win:
//!
//! ```toml
//! [provider]
//! api_key = "sk-..."
//! base_url = "https://api.dedaluslabs.ai"
//! default_model = "gpt-3.5-turbo"
//! timeout_secs = 30
//! ```
//!
//! | Variable | Fallback |
//! |----------|----------|
//! | `DEDALUS_API_KEY` | `your-api-key-here` |
//! | `DEDALUS_BASE_URL` | `https://api.dedaluslabs.ai` |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::{CompletionError, CompletionResult};
use crate::types::DEFAULT_COMPLETION_MODEL;

pub const API_KEY_ENV: &str = "DEDALUS_API_KEY";
pub const BASE_URL_ENV: &str = "DEDALUS_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.dedaluslabs.ai";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Key used when none is configured.
pub const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

/// Keys that stand in for a real credential and are never sent expecting success.
pub const PLACEHOLDER_API_KEYS: [&str; 2] = [PLACEHOLDER_API_KEY, "your-actual-api-key-here"];

/// Connection settings for a completion provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_model: String,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_COMPLETION_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("has_usable_credential", &self.has_usable_credential())
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    provider: ProviderConfig,
}

impl ProviderConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup` instead of the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::default().with_overrides(lookup)
    }

    /// Load a TOML file, then apply environment overrides.
    pub fn from_file<P: AsRef<Path>>(path: P) -> CompletionResult<Self> {
        Self::from_file_with_lookup(path, |key| std::env::var(key).ok())
    }

    pub fn from_file_with_lookup<P: AsRef<Path>>(
        path: P,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> CompletionResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CompletionError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::from_toml(&content)?.with_overrides(lookup))
    }

    /// Parse the `[provider]` table of a TOML document. Missing keys keep
    /// their defaults.
    pub fn from_toml(toml_content: &str) -> CompletionResult<Self> {
        let file: ConfigFile = toml::from_str(toml_content).map_err(|e| {
            CompletionError::configuration(format!("Failed to parse TOML config: {}", e))
        })?;
        Ok(file.provider)
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.api_key = key;
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether the API key looks like a real credential.
    pub fn has_usable_credential(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && !PLACEHOLDER_API_KEYS.contains(&key)
    }
}
