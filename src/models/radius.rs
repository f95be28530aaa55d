//! Search radius handling.

use serde::{Deserialize, Serialize};

/// Miles-to-meters factor used for places queries.
///
/// Deliberately the rounded 1609 rather than 1609.344 so radii match the
/// values the provider has always been sent.
pub const METERS_PER_MILE: u32 = 1609;

/// Search radius in whole miles, always within `[MIN_MILES, MAX_MILES]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchRadius(u8);

impl SearchRadius {
    pub const MIN_MILES: u8 = 1;
    pub const MAX_MILES: u8 = 10;
    pub const DEFAULT_MILES: u8 = 5;

    /// Create a radius, rejecting values outside the slider range.
    pub fn new(miles: u8) -> Option<Self> {
        (Self::MIN_MILES..=Self::MAX_MILES)
            .contains(&miles)
            .then_some(Self(miles))
    }

    /// Create a radius, clamping out-of-range input to the nearest bound.
    pub fn clamped(miles: i64) -> Self {
        let clamped = miles.clamp(Self::MIN_MILES as i64, Self::MAX_MILES as i64);
        Self(clamped as u8)
    }

    pub fn miles(&self) -> u8 {
        self.0
    }

    pub fn meters(&self) -> u32 {
        self.0 as u32 * METERS_PER_MILE
    }
}

impl Default for SearchRadius {
    fn default() -> Self {
        Self(Self::DEFAULT_MILES)
    }
}
