//! OpenAI-compatible chat-completions client

use super::convert::{from_chat_response, to_chat_request};
use super::types::{ChatResponse, OpenAiConfig};
use crate::error::{Error, Result};
use crate::provider::CompletionClient;
use crate::types::{CompletionRequest, CompletionResponse};
use async_trait::async_trait;
use reqwest::Client;

/// Client for `POST {base_url}chat/completions`.
///
/// No timeout is configured here; transport defaults apply.
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    config: OpenAiConfig,
    client: Client,
}

impl ChatCompletionsClient {
    /// Create a new client
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey("openai".to_string()));
        }

        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    /// Create client from environment
    pub fn from_env() -> Result<Self> {
        Self::new(OpenAiConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionsClient {
    fn provider_id(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let url = format!("{}chat/completions", self.config.base_url);
        let body = to_chat_request(&request);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            url = %url,
            model = %body.model,
            messages = body.messages.len(),
            "sending chat completion"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::provider_error(format!(
                "chat completion error {} for model '{}': {}",
                status, body.model, error_text
            )));
        }

        let text = response.text().await?;
        let chat: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            Error::invalid_response(format!("failed to parse chat completion: {}", e))
        })?;

        #[cfg(feature = "tracing")]
        {
            if let Some(usage) = &chat.usage {
                tracing::debug!(
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    "chat completion usage"
                );
            }
        }

        from_chat_response(chat)
    }
}
