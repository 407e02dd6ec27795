//! Hand-written collaborators for exercising the view without the network.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Notify;

use crate::{
    api::{MapSurface, PlacesAPI, PositioningAPI, RoutingAPI, Services},
    entities::{
        directions_fixture, Coordinates, DirectionsRequest, DirectionsResponse, DirectionsStatus,
        MapCommand, PlaceSuggestion, PlaceSuggestions, Position,
    },
    error::{upstream_error, Error},
};

pub struct MockServices {
    pub position: Option<Coordinates>,
    pub position_calls: AtomicUsize,
    pub status: DirectionsStatus,
    pub transport_error: bool,
    pub requests: StdMutex<Vec<DirectionsRequest>>,
    pub release: Notify,
    pub suggestion_calls: StdMutex<Vec<(String, Coordinates, String)>>,
}

impl MockServices {
    pub fn new() -> Self {
        Self {
            position: None,
            position_calls: AtomicUsize::new(0),
            status: DirectionsStatus::Ok,
            transport_error: false,
            requests: StdMutex::new(vec![]),
            release: Notify::new(),
            suggestion_calls: StdMutex::new(vec![]),
        }
    }

    pub fn requests(&self) -> Vec<DirectionsRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PositioningAPI for MockServices {
    async fn current_position(&self) -> Result<Position, Error> {
        self.position_calls.fetch_add(1, Ordering::SeqCst);
        self.position
            .map(|c| Position::new(c, 25.0))
            .ok_or_else(upstream_error)
    }
}

#[async_trait]
impl RoutingAPI for MockServices {
    async fn route(&self, request: DirectionsRequest) -> Result<DirectionsResponse, Error> {
        self.requests.lock().unwrap().push(request.clone());

        // "slow" requests resolve only when the test releases them
        if request.origin == "slow" {
            self.release.notified().await;
        }

        if self.transport_error {
            return Err(upstream_error());
        }

        let distance = if request.origin == "slow" { "old" } else { "5 km" };

        Ok(DirectionsResponse {
            status: self.status,
            result: Some(directions_fixture(distance, "10 mins")),
        })
    }
}

#[async_trait]
impl PlacesAPI for MockServices {
    async fn find_place_suggestions(
        &self,
        input: String,
        location: Coordinates,
        _radius: f64,
        session_token: String,
    ) -> Result<PlaceSuggestions, Error> {
        self.suggestion_calls
            .lock()
            .unwrap()
            .push((input.clone(), location, session_token));

        if input == "fail" {
            return Err(upstream_error());
        }

        Ok(vec![PlaceSuggestion {
            place_id: "p1".into(),
            description: format!("{}, Springfield", input),
        }])
    }
}

impl Services for MockServices {}

#[derive(Clone, Default)]
pub struct RecordingSurface(Arc<StdMutex<Vec<MapCommand>>>);

impl RecordingSurface {
    pub fn commands(&self) -> Vec<MapCommand> {
        self.0.lock().unwrap().clone()
    }
}

impl MapSurface for RecordingSurface {
    fn pan_to(&self, center: Coordinates) {
        self.0.lock().unwrap().push(MapCommand::PanTo { center });
    }

    fn place_marker(&self, position: Coordinates) {
        self.0.lock().unwrap().push(MapCommand::PlaceMarker { position });
    }
}
