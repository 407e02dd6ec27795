mod handlers;
pub mod surface;

use std::net::SocketAddr;

use axum::{
    extract::Extension,
    routing::{get, post, put},
    Router,
};

pub use crate::api::DynViewAPI;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{inputs, map, route, view};
use crate::server::surface::CommandQueue;

pub fn router(api: DynViewAPI) -> Router {
    Router::new()
        .route("/view", get(view::find))
        .route("/inputs/:field", put(inputs::update))
        .route("/inputs/:field/suggestions", get(inputs::suggestions))
        .route("/inputs/:field/place", post(inputs::select_place))
        .route("/route", post(route::calculate).delete(route::clear))
        .route("/map/load", post(map::load))
        .route("/map/recenter", post(map::recenter))
        .route("/map/commands", get(map::commands))
        .layer(Extension(api))
        .layer(Extension(CommandQueue::new()))
}

pub async fn serve(api: DynViewAPI, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(unexpected_error)
}
