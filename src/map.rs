//! Map composition for the nearby-help view.
//!
//! The server only decides what goes on the map. Drawing happens in the
//! browser, where Leaflet reads the serialised [`MapView`].

use serde::Serialize;

use crate::models::{Coordinates, Place, PlaceCategory};

/// Initial zoom level of the map.
pub const DEFAULT_ZOOM: u8 = 14;
/// Rendered map size in pixels.
pub const MAP_WIDTH: u32 = 1000;
pub const MAP_HEIGHT: u32 = 600;

/// Glyph and popup for the user's own position.
pub const USER_GLYPH: &str = "📍";
pub const USER_POPUP: &str = "📍 You are here";

/// One pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub glyph: &'static str,
    /// Plain text; newlines separate lines.
    pub popup: String,
}

/// Result count for one category, as shown above the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: PlaceCategory,
    pub glyph: &'static str,
    pub label: &'static str,
    pub count: usize,
}

/// Everything needed to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
    pub markers: Vec<Marker>,
}

impl MapView {
    /// Compose the map: the user's marker first, then every place in the
    /// order given. Overlapping markers are kept as-is.
    pub fn compose(center: Coordinates, places: &[Place]) -> Self {
        let mut markers = vec![Marker {
            latitude: center.latitude,
            longitude: center.longitude,
            glyph: USER_GLYPH,
            popup: USER_POPUP.to_string(),
        }];

        markers.extend(places.iter().map(place_marker));

        Self {
            center,
            zoom: DEFAULT_ZOOM,
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            markers,
        }
    }

    /// Serialise for embedding inside a `<script>` element.
    pub fn to_script_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "null".to_string())
            .replace("</", "<\\/")
    }
}

/// Per-category counts, in category order.
pub fn category_counts(places: &[(PlaceCategory, Vec<Place>)]) -> Vec<CategoryCount> {
    places
        .iter()
        .map(|(category, found)| CategoryCount {
            category: *category,
            glyph: category.glyph(),
            label: category.label(),
            count: found.len(),
        })
        .collect()
}

fn place_marker(place: &Place) -> Marker {
    let glyph = place.category.glyph();
    Marker {
        latitude: place.coordinates.latitude,
        longitude: place.coordinates.longitude,
        glyph,
        popup: format!("{} {}\n{}", glyph, place.name, place.vicinity),
    }
}
