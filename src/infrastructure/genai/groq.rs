//! Groq chat-completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::tips_provider::{TipsProvider, TipsProviderError};

/// Connection settings for the Groq API.
#[derive(Debug, Clone)]
pub struct GroqSettings {
    pub api_key: String,
    /// API root, e.g. `https://api.groq.com/openai/v1`.
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Tips provider backed by Groq's OpenAI-compatible API.
pub struct GroqTipsProvider {
    client: reqwest::Client,
    settings: GroqSettings,
}

impl GroqTipsProvider {
    /// Builds the provider. No request is sent until [`TipsProvider::complete`].
    pub fn new(settings: GroqSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(Self { client, settings })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.api_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TipsProvider for GroqTipsProvider {
    async fn complete(&self, prompt: &str) -> Result<String, TipsProviderError> {
        tracing::info!("Sending completion request using model {}", self.settings.model);

        let body = ChatCompletionRequest {
            model: &self.settings.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.7,
            max_tokens: 300,
            top_p: 1.0,
            stream: false,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TipsProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TipsProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TipsProviderError::Transport(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(TipsProviderError::EmptyCompletion)
    }
}
