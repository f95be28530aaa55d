//! The render flow: resolve location, then plan, places and map.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::session::SessionContext;
use super::state::PageState;
use crate::config::Config;
use crate::llm::LlmClient;
use crate::map::{category_counts, CategoryCount, MapView};
use crate::models::{
    Coordinates, DisasterType, Place, PlaceCategory, SearchRadius, ADDRESS_NOT_FOUND,
};
use crate::providers::{
    ErrorKind, Geocoder, GooglePlaces, GoogleGeocoder, NominatimReverseGeocoder, PlaceSearch,
    PlanGenerator, ProviderError, ProviderResultExt, ReverseGeocoder,
};

/// User-controlled inputs of one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RescueInputs {
    pub address: String,
    pub disaster: DisasterType,
    pub radius: SearchRadius,
}

/// A failure that aborts the render.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Geocoding failed: {0}")]
    Geocode(#[source] ProviderError),

    #[error("Rescue plan generation failed: {0}")]
    Plan(#[source] ProviderError),

    #[error("Nearby places search failed: {0}")]
    Places(#[source] ProviderError),
}

impl ShellError {
    pub fn provider_error(&self) -> &ProviderError {
        match self {
            Self::Geocode(e) | Self::Plan(e) | Self::Places(e) => e,
        }
    }
}

/// Results that only exist for a resolved location.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyHelp {
    pub plan: String,
    pub counts: Vec<CategoryCount>,
    /// All places, grouped by category in display order.
    pub places: Vec<Place>,
    pub map: MapView,
}

/// Everything the page shows after one render.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutcome {
    pub state: PageState,
    pub disaster: DisasterType,
    pub radius_miles: u8,
    /// `None` when no address was detected or entered.
    pub detected_address: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub help: Option<NearbyHelp>,
}

/// The external services a render depends on.
#[derive(Clone)]
pub struct Providers {
    pub geocoder: Arc<dyn Geocoder>,
    pub reverse_geocoder: Arc<dyn ReverseGeocoder>,
    pub places: Arc<dyn PlaceSearch>,
    pub planner: Arc<dyn PlanGenerator>,
}

impl Providers {
    /// Build the production clients from configuration.
    pub fn from_config(config: &Config) -> Self {
        let timeout = config.request_timeout();
        let user_agent = config.user_agent();

        Self {
            geocoder: Arc::new(GoogleGeocoder::new(&config.google, user_agent, timeout)),
            reverse_geocoder: Arc::new(NominatimReverseGeocoder::new(
                &config.nominatim,
                user_agent,
                timeout,
            )),
            places: Arc::new(GooglePlaces::new(&config.google, user_agent, timeout)),
            planner: Arc::new(LlmClient::new(config.llm.clone())),
        }
    }
}

/// Orchestrates a single render.
#[derive(Clone)]
pub struct RescueShell {
    providers: Providers,
}

impl RescueShell {
    pub fn new(providers: Providers) -> Self {
        Self { providers }
    }

    /// Render the page for the given inputs and session context.
    pub async fn render(
        &self,
        inputs: &RescueInputs,
        session: &SessionContext,
    ) -> Result<RenderOutcome, ShellError> {
        let address = inputs.address.trim();
        let state = PageState::initial(address, session);

        let (state, coordinates, detected_address) = match (state, session.browser_coordinates()) {
            (PageState::GeoResolved, Some(coords)) => {
                let detected = self.detect_address(coords).await;
                (state, Some(coords), detected)
            }
            (PageState::AddressEntered, _) => {
                let coords = self
                    .providers
                    .geocoder
                    .geocode(address)
                    .await
                    .no_match_as_none()
                    .map_err(ShellError::Geocode)?;
                let detected = match coords {
                    Some(_) => address.to_string(),
                    None => ADDRESS_NOT_FOUND.to_string(),
                };
                (state.after_geocode(coords), coords, Some(detected))
            }
            _ => (PageState::GeoUnresolved, None, None),
        };

        let mut outcome = RenderOutcome {
            state,
            disaster: inputs.disaster,
            radius_miles: inputs.radius.miles(),
            detected_address,
            coordinates,
            help: None,
        };

        let Some(coords) = coordinates.filter(|_| state.is_resolved()) else {
            info!("Location unresolved; nothing to render");
            return Ok(outcome);
        };

        let location = outcome.detected_address.as_deref().unwrap_or("");
        let plan = self
            .providers
            .planner
            .rescue_plan(inputs.disaster, location)
            .await
            .map_err(ShellError::Plan)?;

        let grouped = self.search_nearby(coords, inputs.radius).await?;
        let counts = category_counts(&grouped);
        let places: Vec<Place> = grouped.into_iter().flat_map(|(_, found)| found).collect();
        let map = MapView::compose(coords, &places);

        info!(
            "Rendered {} plan with {} nearby places around {}",
            inputs.disaster,
            places.len(),
            coords
        );
        outcome.help = Some(NearbyHelp {
            plan,
            counts,
            places,
            map,
        });
        Ok(outcome)
    }

    /// Reverse geocode a browser position. Never fails the render.
    async fn detect_address(&self, coords: Coordinates) -> Option<String> {
        match self.providers.reverse_geocoder.reverse(coords).await {
            Ok(address) => Some(address),
            Err(e) if e.is_no_match() => Some(ADDRESS_NOT_FOUND.to_string()),
            Err(e) if e.kind == ErrorKind::RateLimited => {
                warn!("Reverse geocoding rate limited; continuing without address");
                None
            }
            Err(e) => {
                debug!("Reverse geocoding failed: {}", e);
                None
            }
        }
    }

    /// Query every category concurrently. The first failure aborts all of them.
    async fn search_nearby(
        &self,
        coords: Coordinates,
        radius: SearchRadius,
    ) -> Result<Vec<(PlaceCategory, Vec<Place>)>, ShellError> {
        let meters = radius.meters();
        let search = |category| self.providers.places.nearby(coords, category, meters);

        let (hospitals, police, shelters) = tokio::try_join!(
            search(PlaceCategory::Hospital),
            search(PlaceCategory::Police),
            search(PlaceCategory::ShelterProxy)
        )
        .map_err(ShellError::Places)?;

        Ok(vec![
            (PlaceCategory::Hospital, hospitals),
            (PlaceCategory::Police, police),
            (PlaceCategory::ShelterProxy, shelters),
        ])
    }
}
