//! Groq completion provider.
//!
//! Calls the OpenAI-compatible chat-completions endpoint (`/chat/completions`)
//! once per request. No retries; the client-level timeout bounds each call.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::config::CompletionConfig;
use super::{ChatMessage, CompletionError, CompletionProvider};

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}

/// Completion provider backed by the Groq API.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    config: CompletionConfig,
    endpoint: Url,
}

impl GroqClient {
    /// Builds the HTTP client once; it is shared across all requests.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let endpoint = config.completions_url()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            endpoint,
        })
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        debug!(
            model = %self.config.model,
            messages = messages.len(),
            "requesting chat completion"
        );

        let resp = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.config.api_key)
            .json(&ChatCompletionRequest {
                model: &self.config.model,
                messages,
                temperature: self.config.temperature,
                max_tokens: self.config.max_tokens,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}
