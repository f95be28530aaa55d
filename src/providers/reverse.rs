//! Reverse geocoding against Nominatim.
//!
//! Nominatim needs no API key but does require an identifying user agent.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::http::{build_client, ensure_success, read_json, transport_error};
use super::{NominatimConfig, Provider, ProviderError, ProviderResult, ReverseGeocoder};
use crate::models::Coordinates;

const PROVIDER: Provider = Provider::ReverseGeocoder;

/// Nominatim reverse response. A miss comes back as `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct NominatimReverseGeocoder {
    client: Client,
    endpoint: String,
}

impl NominatimReverseGeocoder {
    pub fn new(config: &NominatimConfig, user_agent: &str, timeout: Duration) -> Self {
        Self::with_client(config, build_client(user_agent, Some(timeout)))
    }

    pub fn with_client(config: &NominatimConfig, client: Client) -> Self {
        Self {
            client,
            endpoint: format!("{}/reverse", config.endpoint.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimReverseGeocoder {
    async fn reverse(&self, coordinates: Coordinates) -> ProviderResult<String> {
        let lat = coordinates.latitude.to_string();
        let lon = coordinates.longitude.to_string();
        debug!("Reverse geocoding {}", coordinates);

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("format", "jsonv2"),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
            ])
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        let resp = ensure_success(PROVIDER, resp).await?;
        let body: ReverseResponse = read_json(PROVIDER, resp).await?;

        match body.display_name {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => {
                if let Some(reason) = body.error {
                    debug!("Nominatim found no address: {}", reason);
                }
                Err(ProviderError::no_match(PROVIDER))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::stub::StubServer;
    use crate::providers::{ErrorKind, USER_AGENT};
    use reqwest::StatusCode;
    use serde_json::json;

    fn reverse(stub: &StubServer) -> NominatimReverseGeocoder {
        let config = NominatimConfig {
            endpoint: stub.url("/"),
        };
        NominatimReverseGeocoder::new(&config, USER_AGENT, Duration::from_secs(10))
    }

    #[tokio::test]
    async fn test_returns_display_name() {
        let stub = StubServer::start().await.respond(
            "/reverse",
            StatusCode::OK,
            json!({"display_name": "1600 Amphitheatre Parkway, Mountain View, CA"}),
        );

        let address = reverse(&stub)
            .reverse(Coordinates::new(37.4220, -122.0841))
            .await
            .unwrap();
        assert_eq!(address, "1600 Amphitheatre Parkway, Mountain View, CA");

        let requests = stub.requests();
        assert_eq!(requests[0].method.as_str(), "GET");
        assert_eq!(requests[0].path, "/reverse");
        assert_eq!(requests[0].query["format"], "jsonv2");
        assert_eq!(requests[0].query["lat"], "37.422");
        assert_eq!(requests[0].query["lon"], "-122.0841");
        assert_eq!(requests[0].user_agent.as_deref(), Some(USER_AGENT));
    }

    #[tokio::test]
    async fn test_unable_to_geocode_is_no_match() {
        let stub = StubServer::start().await.respond(
            "/reverse",
            StatusCode::OK,
            json!({"error": "Unable to geocode"}),
        );

        let err = reverse(&stub)
            .reverse(Coordinates::new(0.0, 0.0))
            .await
            .unwrap_err();
        assert!(err.is_no_match());
    }

    #[tokio::test]
    async fn test_rate_limit_is_reported() {
        let stub = StubServer::start().await.respond(
            "/reverse",
            StatusCode::TOO_MANY_REQUESTS,
            json!({}),
        );

        let err = reverse(&stub)
            .reverse(Coordinates::new(0.0, 0.0))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::RateLimited);
    }
}
