//! Data models for the rescue assistant.
//!
//! Everything here is request-scoped: values are built for a single render
//! and dropped afterwards.

mod coordinates;
mod disaster;
mod place;
mod radius;

pub use coordinates::Coordinates;
pub use disaster::DisasterType;
pub use place::{Place, PlaceCategory};
pub use radius::{SearchRadius, METERS_PER_MILE};

/// Sentinel shown when a location resolved to no usable address.
pub const ADDRESS_NOT_FOUND: &str = "Address not found";
