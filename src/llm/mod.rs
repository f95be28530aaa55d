//! Language-model client used to draft rescue plans.

mod client;

pub use client::{
    rescue_plan_prompt, LlmClient, LlmConfig, LlmError, SYSTEM_PROMPT, TEMPERATURE,
};
