use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// A one-shot fix delivered by the positioning service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub coordinates: Coordinates,
    /// Radius of uncertainty in metres.
    pub accuracy: f64,
    pub timestamp: DateTime<Utc>,
}

impl Position {
    pub fn new(coordinates: Coordinates, accuracy: f64) -> Self {
        Self {
            coordinates,
            accuracy,
            timestamp: Utc::now(),
        }
    }
}
