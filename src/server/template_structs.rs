//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.

use askama::Template;

use crate::map::CategoryCount;
use crate::models::{DisasterType, SearchRadius};
use crate::shell::{PageState, RenderOutcome, RescueInputs, SessionContext, UNRESOLVED_WARNING};

/// One entry of the disaster selector.
pub struct DisasterOption {
    pub value: &'static str,
    pub selected: bool,
}

/// The rescue page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub address: &'a str,
    pub disasters: Vec<DisasterOption>,
    pub radius: u8,
    pub radius_min: u8,
    pub radius_max: u8,
    /// Browser coordinates echoed back so the next submit keeps them.
    pub lat_val: String,
    pub lon_val: String,
    pub has_browser_location: bool,
    pub state: &'a str,
    pub show_warning: bool,
    pub warning: &'a str,
    pub has_detected_address: bool,
    pub detected_address_val: String,
    pub has_help: bool,
    pub disaster_name: &'a str,
    pub plan: String,
    pub counts: Vec<CategoryCount>,
    pub map_json: String,
    pub map_width: u32,
    pub map_height: u32,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(
        inputs: &'a RescueInputs,
        session: &SessionContext,
        outcome: &'a RenderOutcome,
    ) -> Self {
        let disasters = DisasterType::ALL
            .iter()
            .map(|d| DisasterOption {
                value: d.as_str(),
                selected: *d == inputs.disaster,
            })
            .collect();

        let browser = session.browser_coordinates();
        let (lat_val, lon_val) = browser
            .map(|c| (c.latitude.to_string(), c.longitude.to_string()))
            .unwrap_or_default();

        let help = outcome.help.as_ref();
        let (map_width, map_height) = help
            .map(|h| (h.map.width, h.map.height))
            .unwrap_or((crate::map::MAP_WIDTH, crate::map::MAP_HEIGHT));

        Self {
            title: "Natural Disaster Rescue Assistant",
            address: &inputs.address,
            disasters,
            radius: inputs.radius.miles(),
            radius_min: SearchRadius::MIN_MILES,
            radius_max: SearchRadius::MAX_MILES,
            lat_val,
            lon_val,
            has_browser_location: browser.is_some(),
            state: outcome.state.as_str(),
            show_warning: outcome.state == PageState::GeoUnresolved,
            warning: UNRESOLVED_WARNING,
            has_detected_address: outcome.detected_address.is_some(),
            detected_address_val: outcome.detected_address.clone().unwrap_or_default(),
            has_help: help.is_some(),
            disaster_name: outcome.disaster.as_str(),
            plan: help.map(|h| h.plan.clone()).unwrap_or_default(),
            counts: help.map(|h| h.counts.clone()).unwrap_or_default(),
            map_json: help
                .map(|h| h.map.to_script_json())
                .unwrap_or_else(|| "null".to_string()),
            map_width,
            map_height,
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
}
