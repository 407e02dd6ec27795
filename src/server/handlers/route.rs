use axum::extract::{Extension, Json};
use serde::Serialize;

use crate::api::{RouteControlAPI, SurfaceAPI};
use crate::entities::{RouteOutcome, ViewSnapshot};
use crate::server::DynViewAPI;

#[derive(Serialize)]
pub struct CalculateResponse {
    outcome: RouteOutcome,
    view: ViewSnapshot,
}

pub async fn calculate(Extension(view): Extension<DynViewAPI>) -> Json<CalculateResponse> {
    let outcome = view.calculate_route().await;

    CalculateResponse {
        outcome,
        view: view.snapshot().await,
    }
    .into()
}

pub async fn clear(Extension(view): Extension<DynViewAPI>) -> Json<ViewSnapshot> {
    view.clear_route().await;

    view.snapshot().await.into()
}
