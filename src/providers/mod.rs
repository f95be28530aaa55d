//! Clients for the external providers the assistant delegates to.
//!
//! Every client reports through the same [`ProviderResult`] type. A provider
//! "no match" is an error of kind [`ErrorKind::NoMatch`] rather than a silent
//! empty value, so each caller decides whether a miss, a rate limit or a
//! transport failure is fatal for it.

mod config;
mod geocoder;
mod google;
mod http;
mod places;
mod reverse;

#[cfg(test)]
pub(crate) mod stub;

pub use config::{GoogleConfig, NominatimConfig};
pub use geocoder::GoogleGeocoder;
pub use http::{build_client, USER_AGENT};
pub use places::GooglePlaces;
pub use reverse::NominatimReverseGeocoder;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Coordinates, DisasterType, Place, PlaceCategory};

/// Result type shared by all provider clients.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// External services called during a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Geocoder,
    ReverseGeocoder,
    Places,
    LanguageModel,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Geocoder => "geocoder",
            Self::ReverseGeocoder => "reverse_geocoder",
            Self::Places => "places",
            Self::LanguageModel => "language_model",
        }
    }
}

/// Broad classification of a provider failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No API key configured for a provider that needs one.
    MissingCredentials,
    /// Connection or protocol failure before a response arrived.
    Transport,
    /// The request exceeded its timeout.
    Timeout,
    /// Non-2xx response other than rate limiting.
    Status,
    /// HTTP 429.
    RateLimited,
    /// The response body did not have the expected shape.
    Parse,
    /// The provider answered but had nothing for the query.
    NoMatch,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "missing_credentials",
            Self::Transport => "transport",
            Self::Timeout => "timeout",
            Self::Status => "status",
            Self::RateLimited => "rate_limited",
            Self::Parse => "parse",
            Self::NoMatch => "no_match",
        }
    }
}

/// A failed provider call.
#[derive(Debug, Clone, Error)]
#[error("{} {}: {message}", .provider.as_str(), .kind.as_str())]
pub struct ProviderError {
    pub provider: Provider,
    pub kind: ErrorKind,
    /// HTTP status, when the failure came from a response.
    pub status: Option<u16>,
    pub message: String,
}

impl ProviderError {
    pub fn new(provider: Provider, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            provider,
            kind,
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn missing_credentials(provider: Provider) -> Self {
        Self::new(provider, ErrorKind::MissingCredentials, "no API key configured")
    }

    pub fn no_match(provider: Provider) -> Self {
        Self::new(provider, ErrorKind::NoMatch, "no result")
    }

    pub fn is_no_match(&self) -> bool {
        self.kind == ErrorKind::NoMatch
    }
}

/// Recovery helpers for provider results.
pub trait ProviderResultExt<T> {
    /// Turn a "no match" into `Ok(None)`, keeping every other failure.
    fn no_match_as_none(self) -> ProviderResult<Option<T>>;
}

impl<T> ProviderResultExt<T> for ProviderResult<T> {
    fn no_match_as_none(self) -> ProviderResult<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_no_match() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Free-text address to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> ProviderResult<Coordinates>;
}

/// Coordinates to a human-readable address.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, coordinates: Coordinates) -> ProviderResult<String>;
}

/// Nearby points of interest of one category.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn nearby(
        &self,
        coordinates: Coordinates,
        category: PlaceCategory,
        radius_meters: u32,
    ) -> ProviderResult<Vec<Place>>;
}

/// Short natural-language rescue plan.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn rescue_plan(&self, disaster: DisasterType, location: &str) -> ProviderResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_as_none() {
        let hit: ProviderResult<u8> = Ok(3);
        assert_eq!(hit.no_match_as_none().unwrap(), Some(3));

        let miss: ProviderResult<u8> = Err(ProviderError::no_match(Provider::Geocoder));
        assert_eq!(miss.no_match_as_none().unwrap(), None);

        let failed: ProviderResult<u8> = Err(ProviderError::new(
            Provider::Geocoder,
            ErrorKind::Status,
            "HTTP 500",
        ));
        let err = failed.no_match_as_none().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Status);
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::missing_credentials(Provider::Places);
        assert_eq!(
            err.to_string(),
            "places missing_credentials: no API key configured"
        );
    }
}
