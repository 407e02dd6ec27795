use axum::extract::{Extension, Json};

use crate::{api::SurfaceAPI, entities::ViewSnapshot, server::DynViewAPI};

pub async fn find(Extension(view): Extension<DynViewAPI>) -> Json<ViewSnapshot> {
    view.snapshot().await.into()
}
