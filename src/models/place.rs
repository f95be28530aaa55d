//! Points of interest returned by the places provider.

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Kinds of help searched for around the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Hospital,
    Police,
    /// Places of worship stand in for shelters; the provider has no shelter type.
    ShelterProxy,
}

impl PlaceCategory {
    /// All categories, in the order they are queried and displayed.
    pub const ALL: [PlaceCategory; 3] = [Self::Hospital, Self::Police, Self::ShelterProxy];

    /// The provider's place type string.
    pub fn provider_type(&self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Police => "police",
            Self::ShelterProxy => "church",
        }
    }

    /// Map marker glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Hospital => "🏥",
            Self::Police => "👮",
            Self::ShelterProxy => "⛪",
        }
    }

    /// Plural label used for result counts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hospital => "Hospitals",
            Self::Police => "Police stations",
            Self::ShelterProxy => "Shelters (churches)",
        }
    }
}

/// A nearby place, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub category: PlaceCategory,
    pub coordinates: Coordinates,
    /// Provider-supplied free-text neighbourhood/street description.
    pub vicinity: String,
}
