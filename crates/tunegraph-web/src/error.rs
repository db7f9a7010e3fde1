//! Mapping of store and request errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use tunegraph_core::TunegraphError;
use tunegraph_graph::GraphError;

/// Errors a handler can return.
#[derive(Debug)]
pub enum ApiError {
    /// A required query parameter is absent or empty.
    MissingParameter(&'static str),
    NotFound(String),
    /// The graph or relational store failed.
    Store(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Clients match on 401 for a missing parameter.
            ApiError::MissingParameter(name) => {
                (StatusCode::UNAUTHORIZED, format!("{name} required")).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Store(message) => {
                tracing::error!(error = %message, "Store failure");
                let body = Json(json!({ "error": message }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

impl From<GraphError> for ApiError {
    fn from(e: GraphError) -> Self {
        ApiError::Store(e.to_string())
    }
}

impl From<TunegraphError> for ApiError {
    fn from(e: TunegraphError) -> Self {
        if e.is_not_found() {
            ApiError::NotFound(e.to_string())
        } else {
            ApiError::Store(e.to_string())
        }
    }
}

/// Treat an absent or empty parameter as missing.
pub fn required(value: Option<String>, name: &'static str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::MissingParameter(name))
}
