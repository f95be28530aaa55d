//! In-process provider fakes that record every call.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::render::Providers;
use crate::models::{Coordinates, DisasterType, Place, PlaceCategory};
use crate::providers::{
    ErrorKind, Geocoder, PlaceSearch, PlanGenerator, Provider, ProviderError, ProviderResult,
    ReverseGeocoder,
};

/// Canned outcome of a fake call.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Value(T),
    NoMatch,
    Fail(ErrorKind),
}

impl<T: Clone> Reply<T> {
    fn resolve(&self, provider: Provider) -> ProviderResult<T> {
        match self {
            Reply::Value(v) => Ok(v.clone()),
            Reply::NoMatch => Err(ProviderError::no_match(provider)),
            Reply::Fail(kind) => Err(ProviderError::new(provider, *kind, "fake failure")),
        }
    }
}

#[derive(Clone)]
pub struct FakeProviders {
    geocode: Reply<Coordinates>,
    reverse: Reply<String>,
    plan: Reply<String>,
    failing_category: Option<PlaceCategory>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeProviders {
    pub fn new() -> Self {
        Self {
            geocode: Reply::Value(Coordinates::new(1.0, 2.0)),
            reverse: Reply::Value("Somewhere".to_string()),
            plan: Reply::Value("Stay safe.".to_string()),
            failing_category: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn geocode(mut self, reply: Reply<Coordinates>) -> Self {
        self.geocode = reply;
        self
    }

    pub fn reverse(mut self, reply: Reply<String>) -> Self {
        self.reverse = reply;
        self
    }

    pub fn plan(mut self, reply: Reply<String>) -> Self {
        self.plan = reply;
        self
    }

    pub fn fail_category(mut self, category: PlaceCategory) -> Self {
        self.failing_category = Some(category);
        self
    }

    pub fn providers(&self) -> Providers {
        Providers {
            geocoder: Arc::new(self.clone()),
            reverse_geocoder: Arc::new(self.clone()),
            places: Arc::new(self.clone()),
            planner: Arc::new(self.clone()),
        }
    }

    /// Calls made so far, as `kind:args` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Geocoder for FakeProviders {
    async fn geocode(&self, address: &str) -> ProviderResult<Coordinates> {
        self.record(format!("geocode:{}", address));
        self.geocode.resolve(Provider::Geocoder)
    }
}

#[async_trait]
impl ReverseGeocoder for FakeProviders {
    async fn reverse(&self, coordinates: Coordinates) -> ProviderResult<String> {
        self.record(format!(
            "reverse:{},{}",
            coordinates.latitude, coordinates.longitude
        ));
        self.reverse.resolve(Provider::ReverseGeocoder)
    }
}

#[async_trait]
impl PlaceSearch for FakeProviders {
    async fn nearby(
        &self,
        coordinates: Coordinates,
        category: PlaceCategory,
        radius_meters: u32,
    ) -> ProviderResult<Vec<Place>> {
        self.record(format!(
            "nearby:{}:{}",
            category.provider_type(),
            radius_meters
        ));
        if self.failing_category == Some(category) {
            return Err(ProviderError::new(
                Provider::Places,
                ErrorKind::Status,
                "fake failure",
            )
            .with_status(500));
        }
        Ok(vec![Place {
            name: format!("Nearest {}", category.provider_type()),
            category,
            coordinates: Coordinates::new(coordinates.latitude + 0.01, coordinates.longitude),
            vicinity: "Main St".to_string(),
        }])
    }
}

#[async_trait]
impl PlanGenerator for FakeProviders {
    async fn rescue_plan(&self, disaster: DisasterType, location: &str) -> ProviderResult<String> {
        self.record(format!("plan:{}:{}", disaster, location));
        self.plan.resolve(Provider::LanguageModel)
    }
}
