//! Shared HTTP plumbing for provider clients.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{ErrorKind, Provider, ProviderError};

/// User agent sent to providers that identify callers by it.
pub const USER_AGENT: &str = "disaster_helper";

/// Build a reqwest client with the given user agent and optional timeout.
pub fn build_client(user_agent: &str, timeout: Option<Duration>) -> Client {
    let mut builder = Client::builder().user_agent(user_agent).gzip(true).brotli(true);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().expect("Failed to create HTTP client")
}

/// Map a reqwest send error to a provider error.
pub(crate) fn transport_error(provider: Provider, err: reqwest::Error) -> ProviderError {
    let kind = if err.is_timeout() {
        ErrorKind::Timeout
    } else {
        ErrorKind::Transport
    };
    ProviderError::new(provider, kind, err.to_string())
}

/// Reject non-2xx responses, keeping a snippet of the body for diagnostics.
pub(crate) async fn ensure_success(
    provider: Provider,
    resp: Response,
) -> Result<Response, ProviderError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let kind = if status == StatusCode::TOO_MANY_REQUESTS {
        ErrorKind::RateLimited
    } else {
        ErrorKind::Status
    };
    let body = resp.text().await.unwrap_or_default();
    let snippet: String = body.chars().take(200).collect();
    Err(ProviderError::new(provider, kind, format!("HTTP {}: {}", status, snippet))
        .with_status(status.as_u16()))
}

/// Decode a JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    provider: Provider,
    resp: Response,
) -> Result<T, ProviderError> {
    resp.json()
        .await
        .map_err(|e| ProviderError::new(provider, ErrorKind::Parse, e.to_string()))
}
