//! Wire types shared by the Google geocoding and places responses.

use serde::Deserialize;
use tracing::warn;

use super::Provider;
use crate::models::Coordinates;

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinates {
    fn from(loc: LatLng) -> Self {
        Coordinates::new(loc.lat, loc.lng)
    }
}

/// Log a non-OK provider status.
///
/// Google answers quota and key problems with HTTP 200 and a status string;
/// the results list stays authoritative, so these are only surfaced in logs.
pub(crate) fn log_api_status(provider: Provider, status: Option<&str>, message: Option<&str>) {
    match status {
        None | Some("OK") | Some("ZERO_RESULTS") => {}
        Some(other) => warn!(
            "{} returned status {}: {}",
            provider.as_str(),
            other,
            message.unwrap_or("no error message")
        ),
    }
}
