//! Chat-completion client for rescue plan generation.
//!
//! Speaks the OpenAI-compatible `/v1/chat/completions` API.

mod config;
mod prompts;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use config::LlmConfig;
pub use prompts::{rescue_plan_prompt, SYSTEM_PROMPT};

use crate::models::DisasterType;
use crate::providers::{
    build_client, ErrorKind, PlanGenerator, Provider, ProviderError, ProviderResult, USER_AGENT,
};

/// Sampling temperature for every plan request.
pub const TEMPERATURE: f64 = 0.7;

/// LLM client for rescue plans.
pub struct LlmClient {
    config: LlmConfig,
    client: Client,
}

/// Chat completion request format.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat completion response format.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl LlmClient {
    /// Create a new LLM client with the given configuration.
    pub fn new(config: LlmConfig) -> Self {
        let timeout = config.timeout_secs.map(Duration::from_secs);
        let client = build_client(USER_AGENT, timeout);
        Self { config, client }
    }

    /// Generate a rescue plan for someone at `location` facing `disaster`.
    pub async fn generate_rescue_plan(
        &self,
        disaster: DisasterType,
        location: &str,
    ) -> Result<String, LlmError> {
        let prompt = rescue_plan_prompt(disaster.as_str(), location);

        info!("Generating {} rescue plan", disaster);
        let response = self.call_chat(SYSTEM_PROMPT, &prompt).await?;
        Ok(response.trim().to_string())
    }

    /// Call the chat completion API and return the first choice's content.
    async fn call_chat(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.config.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let url = format!(
            "{}/v1/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        );
        debug!("POST {} (model {})", url, self.config.model);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Connection(e.to_string())
                }
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let chat: ChatResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        chat.choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Parse("response contained no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| LlmError::Parse("first choice has no content".to_string()))
    }
}

#[async_trait]
impl PlanGenerator for LlmClient {
    async fn rescue_plan(&self, disaster: DisasterType, location: &str) -> ProviderResult<String> {
        Ok(self.generate_rescue_plan(disaster, location).await?)
    }
}

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("No API key configured for the language model")]
    MissingApiKey,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<LlmError> for ProviderError {
    fn from(err: LlmError) -> Self {
        let provider = Provider::LanguageModel;
        match err {
            LlmError::MissingApiKey => ProviderError::missing_credentials(provider),
            LlmError::Connection(msg) => ProviderError::new(provider, ErrorKind::Transport, msg),
            LlmError::Timeout => ProviderError::new(provider, ErrorKind::Timeout, "request timed out"),
            LlmError::Api { status, body } => {
                let kind = if status == 429 {
                    ErrorKind::RateLimited
                } else {
                    ErrorKind::Status
                };
                ProviderError::new(provider, kind, format!("HTTP {}: {}", status, body))
                    .with_status(status)
            }
            LlmError::Parse(msg) => ProviderError::new(provider, ErrorKind::Parse, msg),
        }
    }
}
