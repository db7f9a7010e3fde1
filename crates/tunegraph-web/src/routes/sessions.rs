//! Session route handlers.

use axum::{
    extract::{Path, State},
    Json,
};

use tunegraph_core::session::{
    self,
    model::{Session, SessionSet},
};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Session>>, ApiError> {
    Ok(Json(session::list_sessions(&state.db)?))
}

pub async fn list_session_sets(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SessionSet>>, ApiError> {
    Ok(Json(session::list_session_sets(&state.db, id)?))
}
