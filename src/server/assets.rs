//! Static asset constants (CSS and JavaScript).

/// Stylesheet for the web interface.
pub const CSS: &str = include_str!("styles.css");

/// JavaScript for the map widget and browser geolocation.
pub const JS: &str = include_str!("map.js");
