//! Address geocoding against the Google Geocoding API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::google::{log_api_status, Geometry};
use super::http::{build_client, ensure_success, read_json, transport_error};
use super::{Geocoder, GoogleConfig, Provider, ProviderError, ProviderResult};
use crate::models::Coordinates;

const PROVIDER: Provider = Provider::Geocoder;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

/// Forward geocoder. Strict: any non-2xx response is an error.
pub struct GoogleGeocoder {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GoogleGeocoder {
    pub fn new(config: &GoogleConfig, user_agent: &str, timeout: Duration) -> Self {
        Self::with_client(config, build_client(user_agent, Some(timeout)))
    }

    pub fn with_client(config: &GoogleConfig, client: Client) -> Self {
        Self {
            client,
            endpoint: config.geocode_endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, address: &str) -> ProviderResult<Coordinates> {
        if address.trim().is_empty() {
            debug!("Skipping geocode of blank address");
            return Err(ProviderError::no_match(PROVIDER));
        }
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::missing_credentials(PROVIDER))?;

        debug!("Geocoding address: {}", address);
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("address", address), ("key", key)])
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        let resp = ensure_success(PROVIDER, resp).await?;
        let body: GeocodeResponse = read_json(PROVIDER, resp).await?;
        log_api_status(
            PROVIDER,
            body.status.as_deref(),
            body.error_message.as_deref(),
        );

        let first = body
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::no_match(PROVIDER))?;
        Ok(first.geometry.location.into())
    }
}
