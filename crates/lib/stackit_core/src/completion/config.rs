//! Completion configuration resolution.
//!
//! Read once at startup from environment variables and never reloaded.

use std::env;
use std::time::Duration;

use url::Url;

use super::CompletionError;

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for the outbound completion call.
#[derive(Clone)]
pub struct CompletionConfig {
    /// Bearer credential for the completion API.
    pub api_key: String,
    /// API root; `chat/completions` is resolved against it.
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Upper bound on a single upstream call.
    pub timeout: Duration,
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CompletionConfig {
    /// Builds a config with defaults for everything but the credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads configuration from environment variables.
    ///
    /// | Variable                  | Default                            |
    /// |---------------------------|------------------------------------|
    /// | `GROQ_API_KEY`            | required                           |
    /// | `GROQ_BASE_URL`           | `https://api.groq.com/openai/v1`   |
    /// | `GROQ_MODEL`              | `llama3-70b-8192`                  |
    /// | `COMPLETION_TIMEOUT_SECS` | `60`                               |
    pub fn from_env() -> Result<Self, CompletionError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CompletionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GROQ_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                CompletionError::Config("GROQ_API_KEY environment variable not set".to_string())
            })?;

        let mut config = Self::new(api_key);

        if let Some(raw) = lookup("GROQ_BASE_URL") {
            Url::parse(&raw)
                .map_err(|e| CompletionError::Config(format!("Invalid GROQ_BASE_URL '{raw}': {e}")))?;
            config.base_url = raw;
        }

        if let Some(model) = lookup("GROQ_MODEL").filter(|m| !m.is_empty()) {
            config.model = model;
        }

        if let Some(raw) = lookup("COMPLETION_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                CompletionError::Config(format!("Invalid COMPLETION_TIMEOUT_SECS '{raw}'"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Absolute URL of the chat-completions endpoint.
    pub fn completions_url(&self) -> Result<Url, CompletionError> {
        let mut base = Url::parse(&self.base_url)
            .map_err(|e| CompletionError::Config(format!("Invalid base URL: {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join("chat/completions")
            .map_err(|e| CompletionError::Config(format!("Invalid completions URL: {e}")))
    }
}
