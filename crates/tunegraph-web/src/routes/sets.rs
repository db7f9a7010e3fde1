//! Set route handlers.

use axum::{
    extract::{Path, State},
    Json,
};

use tunegraph_core::set::{self, model::Set};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_set(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Set>, ApiError> {
    Ok(Json(set::get_set(&state.db, id)?))
}
