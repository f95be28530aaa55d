//! Presentation shell: turns one set of page inputs into one rendered outcome.
//!
//! A render resolves the user's location first. Only a resolved location
//! leads to plan generation, places search and map composition.

mod render;
mod session;
mod state;

#[cfg(test)]
pub(crate) mod fakes;

pub use render::{NearbyHelp, Providers, RenderOutcome, RescueInputs, RescueShell, ShellError};
pub use session::SessionContext;
pub use state::PageState;

/// Warning shown when no location could be resolved.
pub const UNRESOLVED_WARNING: &str =
    "⚠️ Please enter a valid address or enable browser location to continue.";
