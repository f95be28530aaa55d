//! Provider endpoint and credential configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_PLACES_ENDPOINT: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
pub const DEFAULT_NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org";

/// Google Maps Platform settings (geocoding and places).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// API key. Read from `GOOGLE_API_KEY` when not set in the file.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default = "default_geocode_endpoint")]
    pub geocode_endpoint: String,
    #[serde(default = "default_places_endpoint")]
    pub places_endpoint: String,
}

fn default_geocode_endpoint() -> String {
    DEFAULT_GEOCODE_ENDPOINT.to_string()
}
fn default_places_endpoint() -> String {
    DEFAULT_PLACES_ENDPOINT.to_string()
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            geocode_endpoint: default_geocode_endpoint(),
            places_endpoint: default_places_endpoint(),
        }
    }
}

impl GoogleConfig {
    /// Apply environment variable overrides.
    ///
    /// - `GOOGLE_API_KEY`: API key
    /// - `GOOGLE_GEOCODE_ENDPOINT`, `GOOGLE_PLACES_ENDPOINT`: endpoint URLs
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("GOOGLE_API_KEY") {
            self.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("GOOGLE_GEOCODE_ENDPOINT") {
            self.geocode_endpoint = val;
        }
        if let Ok(val) = std::env::var("GOOGLE_PLACES_ENDPOINT") {
            self.places_endpoint = val;
        }
        self
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Nominatim (OpenStreetMap) reverse geocoding settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL; `/reverse` is appended.
    #[serde(default = "default_nominatim_endpoint")]
    pub endpoint: String,
}

fn default_nominatim_endpoint() -> String {
    DEFAULT_NOMINATIM_ENDPOINT.to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            endpoint: default_nominatim_endpoint(),
        }
    }
}

impl NominatimConfig {
    /// `NOMINATIM_ENDPOINT` overrides the base URL.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("NOMINATIM_ENDPOINT") {
            self.endpoint = val;
        }
        self
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
