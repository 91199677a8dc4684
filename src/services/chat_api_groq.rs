use std::env;
use std::time::Duration;

use async_trait::async_trait;
use bon::Builder;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::services::settings::LlmConfig;
use crate::traits::chat_api::ChatApi;

/// Groq production endpoint (OpenAI-compatible API root).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Model used for extraction.
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";

// Extraction must be deterministic; sampling stays off.
const TEMPERATURE: f32 = 0.0;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// A real implementation of the `ChatApi` trait that sends HTTP requests to an
/// OpenAI-compatible chat-completions endpoint.
#[derive(Builder)]
pub struct GroqChatApi {
    pub client: Client,
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

impl GroqChatApi {
    /// Creates a new `GroqChatApi` instance from the `llm` config section.
    ///
    /// # Environment Variables
    ///
    /// - `GROQ_API_KEY`: upstream credential; takes precedence over
    ///   `llm.api_key` from the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is available from either source, or if
    /// the HTTP client cannot be constructed.
    pub fn from_config(llm: &LlmConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let api_key = env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| llm.api_key.clone())
            .ok_or("Environment variable GROQ_API_KEY is not set or empty")?;

        let timeout = Duration::from_secs(llm.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: llm
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: llm.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
        })
    }
}

#[async_trait]
impl ChatApi for GroqChatApi {
    async fn call_chat_api(
        &self,
        system: &str,
        user: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            temperature: TEMPERATURE,
            stream: false,
        };

        info!(model = %self.model, user_len = user.len(), "chat: completion request");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "HTTP error calling chat completions");
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_message(status, &body).into());
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        info!(model = %self.model, response_len = text.len(), "chat: completion response");
        Ok(text)
    }
}

/// Prefer the structured `error.message` field of an OpenAI-compatible error
/// body; fall back to the raw body, then to the status line.
fn upstream_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(message) = parsed.error.and_then(|e| e.message) {
            if !message.is_empty() {
                return message;
            }
        }
    }
    if body.trim().is_empty() {
        format!("chat completions error {}", status)
    } else {
        body.trim().to_string()
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}
