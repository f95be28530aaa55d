//! Location resolution states of the page.

use serde::Serialize;

use super::session::SessionContext;
use crate::models::Coordinates;

/// Where a render stands with respect to the user's location.
///
/// Every render starts over from the current inputs; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageState {
    /// Nothing typed and no browser position.
    NoInput,
    /// An address was typed but not geocoded yet.
    AddressEntered,
    /// Coordinates are known; downstream work may run.
    GeoResolved,
    /// Geocoding found nothing, or there was nothing to geocode.
    GeoUnresolved,
}

impl PageState {
    /// Entry state for a render.
    ///
    /// A browser position wins over a typed address.
    pub fn initial(address: &str, session: &SessionContext) -> Self {
        if session.browser_coordinates().is_some() {
            Self::GeoResolved
        } else if address.trim().is_empty() {
            Self::NoInput
        } else {
            Self::AddressEntered
        }
    }

    /// Apply the outcome of a geocoding attempt.
    pub fn after_geocode(self, coordinates: Option<Coordinates>) -> Self {
        match (self, coordinates) {
            (Self::GeoResolved, _) => Self::GeoResolved,
            (_, Some(_)) => Self::GeoResolved,
            (_, None) => Self::GeoUnresolved,
        }
    }

    pub fn is_resolved(&self) -> bool {
        *self == Self::GeoResolved
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoInput => "no_input",
            Self::AddressEntered => "address_entered",
            Self::GeoResolved => "geo_resolved",
            Self::GeoUnresolved => "geo_unresolved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_states() {
        let empty = SessionContext::new();
        assert_eq!(PageState::initial("", &empty), PageState::NoInput);
        assert_eq!(PageState::initial("   ", &empty), PageState::NoInput);
        assert_eq!(
            PageState::initial("Houston, TX", &empty),
            PageState::AddressEntered
        );

        let located = SessionContext::from_browser(Some(Coordinates::new(1.0, 2.0)));
        assert_eq!(PageState::initial("", &located), PageState::GeoResolved);
        assert_eq!(
            PageState::initial("Houston, TX", &located),
            PageState::GeoResolved
        );
    }

    #[test]
    fn test_transitions() {
        let coords = Some(Coordinates::new(1.0, 2.0));
        assert_eq!(
            PageState::AddressEntered.after_geocode(coords),
            PageState::GeoResolved
        );
        assert_eq!(
            PageState::AddressEntered.after_geocode(None),
            PageState::GeoUnresolved
        );
        assert_eq!(
            PageState::GeoResolved.after_geocode(None),
            PageState::GeoResolved
        );
        assert!(PageState::GeoResolved.is_resolved());
        assert!(!PageState::GeoUnresolved.is_resolved());
    }
}
