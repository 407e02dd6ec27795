use async_trait::async_trait;
use reqwest::Response as HttpResponse;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    api::{PlacesAPI, PositioningAPI, RoutingAPI, Services},
    config::Config,
    entities::{
        Coordinates, DirectionsRequest, DirectionsResponse, PlaceSuggestions, Position,
    },
    error::{invalid_input_error, upstream_error, Error},
    external::loader,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    predictions: Option<T>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GeolocationResponse {
    location: Coordinates,
    accuracy: f64,
}

/// Google Maps web services behind the view's collaborator traits.
#[derive(Clone)]
pub struct GoogleMaps {
    api_key: String,
    api_base: String,
    geolocation_api_base: String,
    fixed_position: Option<Coordinates>,
}

impl GoogleMaps {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            geolocation_api_base: config.geolocation_api_base.clone(),
            fixed_position: config.fixed_position,
        }
    }

    fn url(base: &str, path: &str) -> String {
        if base.contains("://") {
            format!("{}{}", base.trim_end_matches('/'), path)
        } else {
            format!("https://{}{}", base, path)
        }
    }
}

fn check_status(res: &HttpResponse) -> Result<(), Error> {
    let status_code = res.status().as_u16();

    if (400..500).contains(&status_code) {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(())
}

#[async_trait]
impl RoutingAPI for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn route(&self, request: DirectionsRequest) -> Result<DirectionsResponse, Error> {
        let url = Self::url(&self.api_base, "/maps/api/directions/json");
        let client = &loader::load().await.client;

        let res = client
            .get(url)
            .query(&[("key", &self.api_key)])
            .query(&[("origin", &request.origin)])
            .query(&[("destination", &request.destination)])
            .query(&[("mode", &request.mode)])
            .send()
            .await?;

        check_status(&res)?;

        Ok(res.json().await?)
    }
}

#[async_trait]
impl PlacesAPI for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn find_place_suggestions(
        &self,
        input: String,
        location: Coordinates,
        radius: f64,
        session_token: String,
    ) -> Result<PlaceSuggestions, Error> {
        let location: String = location.into();

        let url = Self::url(&self.api_base, "/maps/api/place/autocomplete/json");
        let client = &loader::load().await.client;

        let res = client
            .get(url)
            .query(&[("key", &self.api_key)])
            .query(&[("input", input)])
            .query(&[("location", location)])
            .query(&[("radius", radius)])
            .query(&[("sessiontoken", session_token)])
            .send()
            .await?;

        check_status(&res)?;

        let data: Response<PlaceSuggestions> = res.json().await?;

        if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
            return Err(upstream_error());
        }

        Ok(data.predictions.unwrap_or_default())
    }
}

#[async_trait]
impl PositioningAPI for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn current_position(&self) -> Result<Position, Error> {
        if let Some(coordinates) = self.fixed_position {
            return Ok(Position::new(coordinates, 0.0));
        }

        let url = Self::url(&self.geolocation_api_base, "/geolocation/v1/geolocate");
        let client = &loader::load().await.client;

        let res = client
            .post(url)
            .query(&[("key", &self.api_key)])
            .json(&json!({ "considerIp": true }))
            .send()
            .await?;

        check_status(&res)?;

        let data: GeolocationResponse = res.json().await?;

        Ok(Position::new(data.location, data.accuracy))
    }
}

impl Services for GoogleMaps {}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        routing::{get, post},
        Json, Router,
    };
    use std::collections::HashMap;
    use std::net::SocketAddr;

    use crate::entities::DirectionsStatus;

    async fn stub_server() -> SocketAddr {
        let app = Router::new()
            .route(
                "/maps/api/directions/json",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    if q.get("mode").map(String::as_str) != Some("driving") {
                        return Json(json!({ "status": "INVALID_REQUEST", "routes": [] }));
                    }
                    if q.get("origin").map(String::as_str) == Some("nowhere") {
                        return Json(json!({ "status": "NOT_FOUND", "routes": [] }));
                    }
                    Json(json!({
                        "status": "OK",
                        "routes": [{
                            "summary": "Main St",
                            "legs": [{
                                "distance": { "text": "5 km", "value": 5000 },
                                "duration": { "text": "10 mins", "value": 600 }
                            }],
                            "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC" }
                        }]
                    }))
                }),
            )
            .route(
                "/maps/api/place/autocomplete/json",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    Json(json!({
                        "status": "OK",
                        "predictions": [{
                            "place_id": "p1",
                            "description": format!("{} Street", q["input"]),
                        }]
                    }))
                }),
            )
            .route(
                "/geolocation/v1/geolocate",
                post(|| async {
                    Json(json!({ "location": { "lat": 46.95, "lng": 7.45 }, "accuracy": 1200.0 }))
                }),
            );

        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        let addr = server.local_addr();

        tokio::spawn(server);

        addr
    }

    async fn stub_client() -> GoogleMaps {
        let addr = stub_server().await;
        let base = format!("http://{}", addr);

        GoogleMaps::new(&Config {
            api_key: "test".into(),
            api_base: base.clone(),
            geolocation_api_base: base,
            listen_address: addr,
            fixed_position: None,
        })
    }

    #[test]
    fn builds_https_urls_for_bare_hosts() {
        assert_eq!(
            GoogleMaps::url("maps.googleapis.com", "/maps/api/directions/json"),
            "https://maps.googleapis.com/maps/api/directions/json"
        );
        assert_eq!(
            GoogleMaps::url("http://127.0.0.1:9000/", "/x"),
            "http://127.0.0.1:9000/x"
        );
    }

    #[tokio::test]
    async fn fetches_driving_directions() {
        let maps = stub_client().await;

        let res = maps
            .route(DirectionsRequest::driving("A".into(), "B".into()))
            .await
            .unwrap();

        assert_eq!(res.status, DirectionsStatus::Ok);
        let leg = &res.result.unwrap().routes[0].legs[0];
        assert_eq!(leg.distance.as_ref().unwrap().text, "5 km");

        let res = maps
            .route(DirectionsRequest::driving("nowhere".into(), "B".into()))
            .await
            .unwrap();

        assert_eq!(res.status, DirectionsStatus::NotFound);
    }

    #[tokio::test]
    async fn fetches_suggestions_and_position() {
        let maps = stub_client().await;

        let suggestions = maps
            .find_place_suggestions("Baker".into(), Coordinates::default(), 1000.0, "s".into())
            .await
            .unwrap();

        assert_eq!(suggestions[0].description, "Baker Street");

        let position = maps.current_position().await.unwrap();
        assert_eq!(position.coordinates, Coordinates::new(46.95, 7.45));
        assert_eq!(position.accuracy, 1200.0);
    }

    #[tokio::test]
    async fn fixed_position_skips_the_network() {
        let maps = GoogleMaps::new(&Config {
            api_key: "".into(),
            api_base: "invalid.localhost".into(),
            geolocation_api_base: "invalid.localhost".into(),
            listen_address: SocketAddr::from(([127, 0, 0, 1], 0)),
            fixed_position: Some(Coordinates::new(1.0, 2.0)),
        });

        let position = maps.current_position().await.unwrap();
        assert_eq!(position.coordinates, Coordinates::new(1.0, 2.0));
    }
}
