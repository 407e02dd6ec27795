use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::entities::{Coordinates, RouteResult};
use crate::error::{invalid_input_error, Error};

pub const DEFAULT_ZOOM: u8 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Loading,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Origin,
    Destination,
}

impl FromStr for InputField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "origin" => Ok(Self::Origin),
            "destination" => Ok(Self::Destination),
            _ => Err(invalid_input_error()),
        }
    }
}

/// What happened to a `calculate_route` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// An input was empty; nothing was requested.
    Skipped,
    Applied { sequence: u64 },
    Failed { sequence: u64 },
    /// A newer request was issued (or the route cleared) before this
    /// response arrived.
    Stale { sequence: u64 },
}

/// Display commands for a live map surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum MapCommand {
    PanTo { center: Coordinates },
    PlaceMarker { position: Coordinates },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteOverlay {
    pub path: Vec<Coordinates>,
    pub distance: String,
    pub duration: String,
    pub start_address: String,
    pub end_address: String,
}

impl From<&RouteResult> for RouteOverlay {
    fn from(route: &RouteResult) -> Self {
        Self {
            path: route.path.coords().map(|c| (*c).into()).collect(),
            distance: route.distance_text.clone(),
            duration: route.duration_text.clone(),
            start_address: route.start_address.clone(),
            end_address: route.end_address.clone(),
        }
    }
}

/// Everything a renderer needs to draw the view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub phase: Phase,
    pub center: Coordinates,
    pub zoom: u8,
    pub disable_default_ui: bool,
    pub marker: Option<Coordinates>,
    pub origin: String,
    pub destination: String,
    pub route: Option<RouteOverlay>,
}

impl ViewSnapshot {
    /// Distance readout; empty while no route is shown.
    pub fn distance(&self) -> &str {
        self.route.as_ref().map(|r| r.distance.as_str()).unwrap_or("")
    }

    /// Duration readout; empty while no route is shown.
    pub fn duration(&self) -> &str {
        self.route.as_ref().map(|r| r.duration.as_str()).unwrap_or("")
    }
}
