//! Language-model client configuration.
//!
//! Env vars: LLM_ENDPOINT, LLM_MODEL, LLM_TIMEOUT_SECS, LLM_API_KEY
//! (OPENAI_API_KEY accepted as fallback for the key)

use serde::{Deserialize, Serialize};

/// Configuration for the chat-completion client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// OpenAI-compatible API base URL (default: https://api.openai.com)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API key. Never written back to config files.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Model name (default: gpt-4)
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    "https://api.openai.com".to_string()
}
fn default_model() -> String {
    "gpt-4".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            model: default_model(),
            timeout_secs: None,
        }
    }
}

impl LlmConfig {
    /// Apply environment variable overrides.
    ///
    /// `LLM_API_KEY` wins over `OPENAI_API_KEY`; either wins over the file.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("LLM_ENDPOINT") {
            self.endpoint = val;
        }

        if let Ok(val) = std::env::var("LLM_API_KEY") {
            self.api_key = Some(val);
        } else if let Ok(val) = std::env::var("OPENAI_API_KEY") {
            self.api_key = Some(val);
        }

        if let Ok(val) = std::env::var("LLM_MODEL") {
            self.model = val;
        }
        if let Ok(val) = std::env::var("LLM_TIMEOUT_SECS") {
            if let Ok(n) = val.parse() {
                self.timeout_secs = Some(n);
            }
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Check if this is the default config.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
