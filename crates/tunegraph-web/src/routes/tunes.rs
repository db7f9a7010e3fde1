//! Tune route handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use tunegraph_core::set::model::SetSummary;
use tunegraph_core::tune::{self, model::Tune};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListTunesParams {
    pub name: Option<String>,
}

pub async fn list_tunes(
    State(state): State<AppState>,
    Query(params): Query<ListTunesParams>,
) -> Result<Json<Vec<Tune>>, ApiError> {
    let tunes = tune::list_tunes(&state.db, params.name.as_deref())?;
    Ok(Json(tunes))
}

pub async fn get_tune(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Tune>, ApiError> {
    Ok(Json(tune::get_tune(&state.db, id)?))
}

pub async fn list_tune_sets(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SetSummary>>, ApiError> {
    Ok(Json(tune::list_sets_for_tune(&state.db, id)?))
}
