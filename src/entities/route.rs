use geo_types::LineString;
use serde::{Deserialize, Serialize};

use crate::error::{upstream_error, Error};
use crate::external::polyline;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectionsStatus {
    Ok,
    NotFound,
    ZeroResults,
    MaxWaypointsExceeded,
    MaxRouteLengthExceeded,
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
    #[serde(other)]
    Unrecognized,
}

impl DirectionsStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRequest {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
}

impl DirectionsRequest {
    pub fn driving(origin: String, destination: String) -> Self {
        Self {
            origin,
            destination,
            mode: TravelMode::Driving,
        }
    }
}

/// Status plus optional result, as the routing service reports them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub status: DirectionsStatus,
    #[serde(flatten)]
    pub result: Option<DirectionsResult>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResult {
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub summary: String,
    pub legs: Vec<DirectionsLeg>,
    pub overview_polyline: EncodedPolyline,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionsLeg {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

/// A computed route as the view shows it: path, distance and duration
/// always travel together.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteResult {
    pub path: LineString<f64>,
    pub distance_text: String,
    pub duration_text: String,
    pub start_address: String,
    pub end_address: String,
}

impl RouteResult {
    /// Builds the overlay from the first leg of the first route.
    ///
    /// An undecodable polyline leaves the path empty; the readouts come
    /// from the leg alone.
    pub fn from_directions(directions: DirectionsResult) -> Result<Self, Error> {
        let route = directions.routes.into_iter().next().ok_or_else(upstream_error)?;
        let leg = route.legs.into_iter().next().ok_or_else(upstream_error)?;

        let text = |v: Option<TextValue>| v.map(|v| v.text).unwrap_or_default();

        let path = match polyline::decode(&route.overview_polyline.points) {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("route geometry dropped: {}", err);
                LineString::new(vec![])
            }
        };

        Ok(Self {
            path,
            distance_text: text(leg.distance),
            duration_text: text(leg.duration),
            start_address: leg.start_address,
            end_address: leg.end_address,
        })
    }
}

#[cfg(test)]
pub(crate) fn directions_fixture(distance: &str, duration: &str) -> DirectionsResult {
    DirectionsResult {
        routes: vec![DirectionsRoute {
            summary: "A1".into(),
            legs: vec![DirectionsLeg {
                distance: Some(TextValue {
                    text: distance.into(),
                    value: 5000.0,
                }),
                duration: Some(TextValue {
                    text: duration.into(),
                    value: 600.0,
                }),
                start_address: "A".into(),
                end_address: "B".into(),
            }],
            overview_polyline: EncodedPolyline {
                points: "_p~iF~ps|U_ulLnnqC_mqNvxq`@".into(),
            },
        }],
    }
}

#[test]
fn route_result_takes_first_leg() {
    let result = RouteResult::from_directions(directions_fixture("5 km", "10 mins")).unwrap();

    assert_eq!(result.distance_text, "5 km");
    assert_eq!(result.duration_text, "10 mins");
    assert_eq!(result.path.0.len(), 3);
    assert_eq!(result.start_address, "A");
    assert_eq!(result.end_address, "B");
}

#[test]
fn bad_geometry_keeps_readouts() {
    let mut directions = directions_fixture("5 km", "10 mins");
    directions.routes[0].overview_polyline.points = "_p~iF~ps|U_".into();

    let result = RouteResult::from_directions(directions).unwrap();

    assert!(result.path.0.is_empty());
    assert_eq!(result.distance_text, "5 km");
    assert_eq!(result.duration_text, "10 mins");
}

#[test]
fn route_result_requires_a_leg() {
    let mut directions = directions_fixture("5 km", "10 mins");
    directions.routes[0].legs.clear();
    assert!(RouteResult::from_directions(directions).is_err());

    assert!(RouteResult::from_directions(DirectionsResult::default()).is_err());
}

#[test]
fn parses_directions_payload() {
    let body = r#"{
        "status": "OK",
        "geocoded_waypoints": [],
        "routes": [{
            "summary": "Main St",
            "legs": [{
                "distance": {"text": "5 km", "value": 5012},
                "duration": {"text": "10 mins", "value": 583},
                "start_address": "A",
                "end_address": "B"
            }],
            "overview_polyline": {"points": "_p~iF~ps|U"}
        }]
    }"#;

    let response: DirectionsResponse = serde_json::from_str(body).unwrap();
    assert!(response.status.is_ok());
    assert_eq!(response.result.unwrap().routes[0].legs.len(), 1);

    let denied: DirectionsResponse =
        serde_json::from_str(r#"{"status": "REQUEST_DENIED", "routes": []}"#).unwrap();
    assert_eq!(denied.status, DirectionsStatus::RequestDenied);

    let odd: DirectionsResponse = serde_json::from_str(r#"{"status": "SOMETHING_NEW"}"#).unwrap();
    assert_eq!(odd.status, DirectionsStatus::Unrecognized);
}
