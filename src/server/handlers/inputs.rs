use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};

use crate::api::{InputAPI, SurfaceAPI};
use crate::entities::{InputField, PlaceSuggestion, PlaceSuggestions, ViewSnapshot};
use crate::error::Error;
use crate::server::DynViewAPI;

#[derive(Serialize, Deserialize)]
pub struct UpdateParams {
    text: String,
}

#[derive(Serialize, Deserialize)]
pub struct SuggestionParams {
    input: String,
}

pub async fn update(
    Extension(view): Extension<DynViewAPI>,
    Path(field): Path<String>,
    Json(params): Json<UpdateParams>,
) -> Result<Json<ViewSnapshot>, Error> {
    let field: InputField = field.parse()?;
    view.set_input(field, params.text).await;

    Ok(view.snapshot().await.into())
}

pub async fn suggestions(
    Extension(view): Extension<DynViewAPI>,
    Path(field): Path<String>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<PlaceSuggestions>, Error> {
    let field: InputField = field.parse()?;
    let suggestions = view.place_suggestions(field, params.input).await;

    Ok(suggestions.into())
}

pub async fn select_place(
    Extension(view): Extension<DynViewAPI>,
    Path(field): Path<String>,
    Json(suggestion): Json<PlaceSuggestion>,
) -> Result<Json<ViewSnapshot>, Error> {
    let field: InputField = field.parse()?;
    view.select_place(field, suggestion).await;

    Ok(view.snapshot().await.into())
}
