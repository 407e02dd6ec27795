use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{
    Coordinates, DirectionsRequest, DirectionsResponse, InputField, PlaceSuggestion,
    PlaceSuggestions, Position, RouteOutcome, ViewSnapshot,
};
use crate::error::Error;

// external collaborators

#[async_trait]
pub trait PositioningAPI {
    async fn current_position(&self) -> Result<Position, Error>;
}

#[async_trait]
pub trait RoutingAPI {
    /// A non-`OK` status is a normal response, not an `Err`.
    async fn route(&self, request: DirectionsRequest) -> Result<DirectionsResponse, Error>;
}

#[async_trait]
pub trait PlacesAPI {
    async fn find_place_suggestions(
        &self,
        input: String,
        location: Coordinates,
        radius: f64,
        session_token: String,
    ) -> Result<PlaceSuggestions, Error>;
}

/// Handle to a live map surface.
pub trait MapSurface: Send + Sync {
    fn pan_to(&self, center: Coordinates);
    fn place_marker(&self, position: Coordinates);
}

pub trait Services: PositioningAPI + RoutingAPI + PlacesAPI {}

pub type DynServices = Arc<dyn Services + Send + Sync>;

// the view itself

#[async_trait]
pub trait RouteControlAPI {
    async fn calculate_route(&self) -> RouteOutcome;
    async fn clear_route(&self);
}

#[async_trait]
pub trait InputAPI {
    async fn set_input(&self, field: InputField, text: String);
    async fn place_suggestions(&self, field: InputField, input: String) -> PlaceSuggestions;
    async fn select_place(&self, field: InputField, suggestion: PlaceSuggestion);
}

#[async_trait]
pub trait SurfaceAPI {
    async fn snapshot(&self) -> ViewSnapshot;
    async fn on_map_load(&self, handle: Box<dyn MapSurface>);
    async fn recenter(&self) -> bool;
}

pub trait ViewAPI: RouteControlAPI + InputAPI + SurfaceAPI {}

pub type DynViewAPI = Arc<dyn ViewAPI + Send + Sync>;
