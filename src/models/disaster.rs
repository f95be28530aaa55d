//! Disaster types offered in the selector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of disasters a rescue plan can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisasterType {
    #[default]
    Earthquake,
    Flood,
    Wildfire,
    Hurricane,
    Tornado,
    Landslide,
    Pandemic,
}

impl DisasterType {
    /// All options, in selector order.
    pub const ALL: [DisasterType; 7] = [
        Self::Earthquake,
        Self::Flood,
        Self::Wildfire,
        Self::Hurricane,
        Self::Tornado,
        Self::Landslide,
        Self::Pandemic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earthquake => "Earthquake",
            Self::Flood => "Flood",
            Self::Wildfire => "Wildfire",
            Self::Hurricane => "Hurricane",
            Self::Tornado => "Tornado",
            Self::Landslide => "Landslide",
            Self::Pandemic => "Pandemic",
        }
    }

    /// Parse a disaster name, ignoring case and surrounding whitespace.
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
