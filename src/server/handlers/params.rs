//! Query parameters shared by the page and the JSON API.

use serde::Deserialize;

use crate::models::{Coordinates, DisasterType, SearchRadius};
use crate::shell::{RescueInputs, SessionContext};

/// Raw page inputs.
///
/// Everything arrives as text: HTML forms submit empty strings for blank
/// fields, which must not reject the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RescueParams {
    pub address: Option<String>,
    pub disaster: Option<String>,
    pub radius: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl RescueParams {
    /// Form inputs. Unknown disasters fall back to the first option and the
    /// radius is clamped to the slider range.
    pub fn inputs(&self) -> RescueInputs {
        let disaster = self
            .disaster
            .as_deref()
            .and_then(DisasterType::from_str)
            .unwrap_or_default();
        let radius = self
            .radius
            .as_deref()
            .and_then(|r| r.trim().parse::<i64>().ok())
            .map(SearchRadius::clamped)
            .unwrap_or_default();

        RescueInputs {
            address: self.address.clone().unwrap_or_default(),
            disaster,
            radius,
        }
    }

    /// Browser-supplied position, if both halves are present.
    pub fn session(&self) -> SessionContext {
        let mut session = SessionContext::new();
        if let Some(coords) = Coordinates::from_parts(parse_f64(&self.lat), parse_f64(&self.lon))
        {
            session.record_geolocation(coords);
        }
        session
    }
}

fn parse_f64(value: &Option<String>) -> Option<f64> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RescueParams {
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        };
        RescueParams {
            address: get("address"),
            disaster: get("disaster"),
            radius: get("radius"),
            lat: get("lat"),
            lon: get("lon"),
        }
    }

    #[test]
    fn test_defaults() {
        let inputs = params(&[]).inputs();
        assert_eq!(inputs.address, "");
        assert_eq!(inputs.disaster, DisasterType::Earthquake);
        assert_eq!(inputs.radius.miles(), 5);
        assert!(params(&[]).session().browser_coordinates().is_none());
    }

    #[test]
    fn test_parses_form_values() {
        let p = params(&[
            ("address", "Houston, TX"),
            ("disaster", "flood"),
            ("radius", "12"),
            ("lat", "29.76"),
            ("lon", " -95.37 "),
        ]);
        let inputs = p.inputs();
        assert_eq!(inputs.disaster, DisasterType::Flood);
        assert_eq!(inputs.radius.miles(), 10);
        assert_eq!(
            p.session().browser_coordinates(),
            Some(Coordinates::new(29.76, -95.37))
        );
    }

    #[test]
    fn test_blank_and_partial_coordinates_are_ignored() {
        let blank = params(&[("lat", ""), ("lon", "")]);
        assert!(blank.session().browser_coordinates().is_none());

        let partial = params(&[("lat", "1.5")]);
        assert!(partial.session().browser_coordinates().is_none());

        let garbage = params(&[("lat", "north"), ("lon", "2")]);
        assert!(garbage.session().browser_coordinates().is_none());
    }
}
