//! Graph explorer route handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use tunegraph_core::VizGraph;
use tunegraph_graph::{explore, EntityKind};

use crate::error::{required, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TuneGraphParams {
    #[serde(rename = "tuneName")]
    pub tune_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetGraphParams {
    #[serde(rename = "setName")]
    pub set_name: Option<String>,
}

/// GET /graph/tune?tuneName= - Neighborhood of a tune.
pub async fn tune_graph(
    State(state): State<AppState>,
    Query(params): Query<TuneGraphParams>,
) -> Result<Json<VizGraph>, ApiError> {
    let name = required(params.tune_name, "tuneName")?;
    let graph = explore(state.graph.as_ref(), EntityKind::Tune, &name).await?;
    Ok(Json(graph))
}

/// GET /graph/set?setName= - Neighborhood of a set, keyed by its description.
pub async fn set_graph(
    State(state): State<AppState>,
    Query(params): Query<SetGraphParams>,
) -> Result<Json<VizGraph>, ApiError> {
    let description = required(params.set_name, "setName")?;
    let graph = explore(state.graph.as_ref(), EntityKind::Set, &description).await?;
    Ok(Json(graph))
}
