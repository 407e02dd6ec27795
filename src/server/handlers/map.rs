use axum::extract::{Extension, Json};
use serde::Serialize;

use crate::api::SurfaceAPI;
use crate::entities::{MapCommand, ViewSnapshot};
use crate::server::{surface::CommandQueue, DynViewAPI};

#[derive(Serialize)]
pub struct RecenterResponse {
    panned: bool,
}

pub async fn load(
    Extension(view): Extension<DynViewAPI>,
    Extension(queue): Extension<CommandQueue>,
) -> Json<ViewSnapshot> {
    view.on_map_load(Box::new(queue.surface())).await;

    view.snapshot().await.into()
}

pub async fn recenter(Extension(view): Extension<DynViewAPI>) -> Json<RecenterResponse> {
    let panned = view.recenter().await;

    RecenterResponse { panned }.into()
}

pub async fn commands(Extension(queue): Extension<CommandQueue>) -> Json<Vec<MapCommand>> {
    queue.drain().into()
}
