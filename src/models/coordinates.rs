//! Geographic coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair.
///
/// An unresolved location is modelled as `Option<Coordinates>`; a value of this
/// type always carries both components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build coordinates from two optional components.
    ///
    /// Returns `None` unless both are present and finite.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(Self::new(lat, lon))
            }
            _ => None,
        }
    }

    /// Format as the `lat,lng` pair used in provider query strings.
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_both() {
        assert_eq!(
            Coordinates::from_parts(Some(1.0), Some(2.0)),
            Some(Coordinates::new(1.0, 2.0))
        );
        assert_eq!(Coordinates::from_parts(Some(1.0), None), None);
        assert_eq!(Coordinates::from_parts(None, Some(2.0)), None);
        assert_eq!(Coordinates::from_parts(None, None), None);
        assert_eq!(Coordinates::from_parts(Some(f64::NAN), Some(2.0)), None);
    }

    #[test]
    fn test_zero_is_a_valid_component() {
        // Null island is a real coordinate, not an absent one.
        assert!(Coordinates::from_parts(Some(0.0), Some(0.0)).is_some());
    }

    #[test]
    fn test_query_value() {
        let coords = Coordinates::new(37.4220, -122.0841);
        assert_eq!(coords.to_query_value(), "37.422,-122.0841");
    }
}
