use std::env;
use std::net::SocketAddr;

use crate::{entities::Coordinates, error::Error};

pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
pub const GOOGLE_MAPS_API_BASE: &str = "GOOGLE_MAPS_API_BASE";
pub const GOOGLE_GEOLOCATION_API_BASE: &str = "GOOGLE_GEOLOCATION_API_BASE";
pub const MAPVIEW_LISTEN_ADDRESS: &str = "MAPVIEW_LISTEN_ADDRESS";
pub const MAPVIEW_FIXED_POSITION: &str = "MAPVIEW_FIXED_POSITION";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub geolocation_api_base: String,
    pub listen_address: SocketAddr,
    pub fixed_position: Option<Coordinates>,
}

impl Config {
    /// Reads the process environment (after `.env`, if present).
    pub fn from_env() -> Result<Self, Error> {
        if let Err(err) = dotenv::dotenv() {
            tracing::debug!("no .env file loaded: {}", err);
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(GOOGLE_MAPS_API_KEY).unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!(
                "The `{}` environment variable isn't set. Map services will reject requests.",
                GOOGLE_MAPS_API_KEY
            );
        }

        let api_base = lookup(GOOGLE_MAPS_API_BASE).unwrap_or_else(|| "maps.googleapis.com".into());
        let geolocation_api_base =
            lookup(GOOGLE_GEOLOCATION_API_BASE).unwrap_or_else(|| "www.googleapis.com".into());

        let listen_address = lookup(MAPVIEW_LISTEN_ADDRESS)
            .unwrap_or_else(|| "127.0.0.1:3000".into())
            .parse()?;

        let fixed_position = match lookup(MAPVIEW_FIXED_POSITION) {
            Some(value) if !value.is_empty() => Some(value.parse()?),
            _ => None,
        };

        Ok(Self {
            api_key,
            api_base,
            geolocation_api_base,
            listen_address,
            fixed_position,
        })
    }
}

#[cfg(test)]
fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: std::collections::HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();

    assert_eq!(config.api_key, "");
    assert_eq!(config.api_base, "maps.googleapis.com");
    assert_eq!(config.geolocation_api_base, "www.googleapis.com");
    assert_eq!(config.listen_address, "127.0.0.1:3000".parse().unwrap());
    assert_eq!(config.fixed_position, None);
}

#[test]
fn reads_overrides() {
    let config = Config::from_lookup(lookup_from(&[
        (GOOGLE_MAPS_API_KEY, "secret"),
        (MAPVIEW_LISTEN_ADDRESS, "0.0.0.0:8080"),
        (MAPVIEW_FIXED_POSITION, "51.5,-0.12"),
    ]))
    .unwrap();

    assert_eq!(config.api_key, "secret");
    assert_eq!(config.listen_address.port(), 8080);
    assert_eq!(config.fixed_position, Some(Coordinates::new(51.5, -0.12)));
}

#[test]
fn rejects_bad_values() {
    assert!(Config::from_lookup(lookup_from(&[(MAPVIEW_LISTEN_ADDRESS, "nowhere")])).is_err());
    assert!(Config::from_lookup(lookup_from(&[(MAPVIEW_FIXED_POSITION, "x,y")])).is_err());
}
