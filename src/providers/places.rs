//! Nearby search against the Google Places API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::google::{log_api_status, Geometry};
use super::http::{build_client, ensure_success, read_json, transport_error};
use super::{GoogleConfig, PlaceSearch, Provider, ProviderError, ProviderResult};
use crate::models::{Coordinates, Place, PlaceCategory};

const PROVIDER: Provider = Provider::Places;

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    #[serde(default)]
    results: Vec<NearbyResult>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NearbyResult {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    vicinity: Option<String>,
    geometry: Geometry,
}

/// Places nearby-search client.
///
/// Only the first page of results is read; `next_page_token` is ignored.
pub struct GooglePlaces {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GooglePlaces {
    pub fn new(config: &GoogleConfig, user_agent: &str, timeout: Duration) -> Self {
        Self::with_client(config, build_client(user_agent, Some(timeout)))
    }

    pub fn with_client(config: &GoogleConfig, client: Client) -> Self {
        Self {
            client,
            endpoint: config.places_endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl PlaceSearch for GooglePlaces {
    async fn nearby(
        &self,
        coordinates: Coordinates,
        category: PlaceCategory,
        radius_meters: u32,
    ) -> ProviderResult<Vec<Place>> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::missing_credentials(PROVIDER))?;

        let location = coordinates.to_query_value();
        let radius = radius_meters.to_string();
        debug!(
            "Searching {} within {}m of {}",
            category.provider_type(),
            radius,
            location
        );

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("type", category.provider_type()),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        let resp = ensure_success(PROVIDER, resp).await?;
        let body: NearbyResponse = read_json(PROVIDER, resp).await?;
        log_api_status(
            PROVIDER,
            body.status.as_deref(),
            body.error_message.as_deref(),
        );

        Ok(body
            .results
            .into_iter()
            .map(|r| Place {
                name: r.name.unwrap_or_else(|| "Unknown".to_string()),
                category,
                coordinates: r.geometry.location.into(),
                vicinity: r.vicinity.unwrap_or_default(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchRadius;
    use crate::providers::stub::StubServer;
    use crate::providers::ErrorKind;
    use reqwest::StatusCode;
    use serde_json::json;

    fn places(stub: &StubServer) -> GooglePlaces {
        let config = GoogleConfig {
            api_key: Some("k".to_string()),
            places_endpoint: stub.url("/place/nearbysearch/json"),
            ..Default::default()
        };
        GooglePlaces::new(&config, "test-agent", Duration::from_secs(10))
    }

    #[tokio::test]
    async fn test_request_parameters() {
        let stub = StubServer::start().await.respond(
            "/place/nearbysearch/json",
            StatusCode::OK,
            json!({"status": "ZERO_RESULTS", "results": []}),
        );
        let radius = SearchRadius::new(5).unwrap();

        let found = places(&stub)
            .nearby(
                Coordinates::new(37.4220, -122.0841),
                PlaceCategory::Hospital,
                radius.meters(),
            )
            .await
            .unwrap();
        assert!(found.is_empty());

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method.as_str(), "GET");
        assert_eq!(requests[0].path, "/place/nearbysearch/json");
        let query = &requests[0].query;
        assert_eq!(query["radius"], "8045");
        assert_eq!(query["type"], "hospital");
        assert_eq!(query["key"], "k");

        let (lat, lng) = query["location"].split_once(',').unwrap();
        assert_eq!(lat.parse::<f64>().unwrap(), 37.4220);
        assert_eq!(lng.parse::<f64>().unwrap(), -122.0841);
    }

    #[tokio::test]
    async fn test_keeps_provider_order_and_defaults() {
        let stub = StubServer::start().await.respond(
            "/place/nearbysearch/json",
            StatusCode::OK,
            json!({
                "status": "OK",
                "results": [
                    {"name": "Zeta Chapel", "vicinity": "1 Main St",
                     "geometry": {"location": {"lat": 1.0, "lng": 2.0}}},
                    {"geometry": {"location": {"lat": 3.0, "lng": 4.0}}},
                    {"name": "Alpha Church", "vicinity": "9 Elm St",
                     "geometry": {"location": {"lat": 5.0, "lng": 6.0}}}
                ],
                "next_page_token": "ignored"
            }),
        );

        let found = places(&stub)
            .nearby(Coordinates::new(0.0, 0.0), PlaceCategory::ShelterProxy, 1609)
            .await
            .unwrap();

        let names: Vec<_> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta Chapel", "Unknown", "Alpha Church"]);
        assert_eq!(found[1].vicinity, "");
        assert_eq!(found[2].coordinates, Coordinates::new(5.0, 6.0));
        assert!(found
            .iter()
            .all(|p| p.category == PlaceCategory::ShelterProxy));
        assert_eq!(stub.requests()[0].query["type"], "church");
    }

    #[tokio::test]
    async fn test_http_error_is_fatal() {
        let stub = StubServer::start().await.respond(
            "/place/nearbysearch/json",
            StatusCode::SERVICE_UNAVAILABLE,
            json!({}),
        );

        let err = places(&stub)
            .nearby(Coordinates::new(0.0, 0.0), PlaceCategory::Police, 1609)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Status);
        assert_eq!(err.status, Some(503));
    }

    #[tokio::test]
    async fn test_missing_geometry_is_parse_error() {
        let stub = StubServer::start().await.respond(
            "/place/nearbysearch/json",
            StatusCode::OK,
            json!({"results": [{"name": "No Location"}]}),
        );

        let err = places(&stub)
            .nearby(Coordinates::new(0.0, 0.0), PlaceCategory::Police, 1609)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
    }
}
