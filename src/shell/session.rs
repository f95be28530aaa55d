//! Per-user context carried between renders.

use crate::models::Coordinates;

/// Location state that outlives a single render.
///
/// The only slot is the browser-reported position. It is written solely by
/// the geolocation path and read once at the top of each render.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionContext {
    browser_coordinates: Option<Coordinates>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a request that carried browser coordinates (or not).
    pub fn from_browser(coordinates: Option<Coordinates>) -> Self {
        Self {
            browser_coordinates: coordinates,
        }
    }

    /// Store a position reported by browser geolocation.
    pub fn record_geolocation(&mut self, coordinates: Coordinates) {
        self.browser_coordinates = Some(coordinates);
    }

    pub fn browser_coordinates(&self) -> Option<Coordinates> {
        self.browser_coordinates
    }
}
