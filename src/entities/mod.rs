mod coordinates;
mod place;
mod position;
mod route;
mod view;

pub use coordinates::Coordinates;
pub use place::{PlaceSuggestion, PlaceSuggestions};
pub use position::Position;
#[cfg(test)]
pub(crate) use route::directions_fixture;
pub use route::{
    DirectionsLeg, DirectionsRequest, DirectionsResponse, DirectionsResult, DirectionsRoute,
    DirectionsStatus, EncodedPolyline, RouteResult, TextValue, TravelMode,
};
pub use view::{
    InputField, MapCommand, Phase, RouteOutcome, RouteOverlay, ViewSnapshot, DEFAULT_ZOOM,
};
