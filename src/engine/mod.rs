mod input_api;
mod location;
mod route_api;
mod surface_api;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::{DynServices, MapSurface, ViewAPI},
    entities::{Coordinates, InputField, Phase, Position, RouteResult},
};

/// Radius in metres around the map center that autocomplete is biased to.
pub const SUGGESTION_RADIUS: f64 = 50_000.0;

/// The single map view: owns all view state for its lifetime.
pub struct MapView {
    services: DynServices,
    state: Mutex<ViewState>,
    sequence: AtomicU64,
    mounted: AtomicBool,
    loaded: AtomicBool,
}

struct ViewState {
    center: Coordinates,
    last_known: Option<Position>,
    origin: String,
    destination: String,
    origin_session: Uuid,
    destination_session: Uuid,
    route: Option<RouteResult>,
    map: Option<Box<dyn MapSurface>>,
    marker: Option<Coordinates>,
}

impl ViewState {
    fn new() -> Self {
        Self {
            center: Coordinates::default(),
            last_known: None,
            origin: String::new(),
            destination: String::new(),
            origin_session: Uuid::new_v4(),
            destination_session: Uuid::new_v4(),
            route: None,
            map: None,
            marker: None,
        }
    }

    fn home(&self) -> Coordinates {
        self.last_known
            .as_ref()
            .map(|p| p.coordinates)
            .unwrap_or_default()
    }

    fn input(&self, field: InputField) -> &str {
        match field {
            InputField::Origin => &self.origin,
            InputField::Destination => &self.destination,
        }
    }

    fn input_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Origin => &mut self.origin,
            InputField::Destination => &mut self.destination,
        }
    }

    fn session(&self, field: InputField) -> Uuid {
        match field {
            InputField::Origin => self.origin_session,
            InputField::Destination => self.destination_session,
        }
    }

    fn renew_session(&mut self, field: InputField) {
        match field {
            InputField::Origin => self.origin_session = Uuid::new_v4(),
            InputField::Destination => self.destination_session = Uuid::new_v4(),
        }
    }
}

impl MapView {
    pub fn new(services: DynServices) -> Self {
        Self {
            services,
            state: Mutex::new(ViewState::new()),
            sequence: AtomicU64::new(0),
            mounted: AtomicBool::new(false),
            loaded: AtomicBool::new(false),
        }
    }

    /// Called once the maps library gate has resolved.
    #[tracing::instrument(name = "MapView::mark_loaded", skip(self))]
    pub fn mark_loaded(&self) {
        if !self.loaded.swap(true, Ordering::SeqCst) {
            tracing::info!("map view ready");
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loaded.load(Ordering::SeqCst) {
            Phase::Ready
        } else {
            Phase::Loading
        }
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, sequence: u64) -> bool {
        self.sequence.load(Ordering::SeqCst) == sequence
    }
}

impl ViewAPI for MapView {}
