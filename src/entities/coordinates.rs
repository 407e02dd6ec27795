use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{invalid_input_error, Error};

/// A latitude/longitude pair in degrees.
///
/// Google answers with `lat`/`lng` keys, so both spellings deserialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinates> for String {
    fn from(c: Coordinates) -> Self {
        format!("{},{}", c.latitude, c.longitude)
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s.split_once(',').ok_or_else(invalid_input_error)?;

        let latitude: f64 = lat.trim().parse().map_err(|_| invalid_input_error())?;
        let longitude: f64 = lng.trim().parse().map_err(|_| invalid_input_error())?;

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid_input_error());
        }

        Ok(Self::new(latitude, longitude))
    }
}

// geo-types keeps x = longitude, y = latitude
impl From<Coordinates> for Coord<f64> {
    fn from(c: Coordinates) -> Self {
        Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinates {
    fn from(c: Coord<f64>) -> Self {
        Self::new(c.y, c.x)
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(c: Coordinates) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}

#[test]
fn parses_lat_lng_pairs() {
    let c: Coordinates = "47.3769, 8.5417".parse().unwrap();
    assert_eq!(c, Coordinates::new(47.3769, 8.5417));

    assert!("47.3769".parse::<Coordinates>().is_err());
    assert!("north,east".parse::<Coordinates>().is_err());
    assert!("91.0,0.0".parse::<Coordinates>().is_err());
}

#[test]
fn accepts_google_field_names() {
    let c: Coordinates = serde_json::from_str(r#"{"lat": 1.5, "lng": -2.25}"#).unwrap();
    assert_eq!(c, Coordinates::new(1.5, -2.25));

    let coord: Coord<f64> = c.into();
    assert_eq!(coord.x, -2.25);
    assert_eq!(Coordinates::from(coord), c);
}
