//! JSON API handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::super::AppState;
use super::params::RescueParams;
use crate::providers::{ErrorKind, Provider};

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Error body for failed renders.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub provider: Provider,
    pub kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Run one render and return the outcome as JSON.
///
/// Provider failures that abort a render answer 502.
pub async fn api_rescue(
    State(state): State<AppState>,
    Query(params): Query<RescueParams>,
) -> Response {
    match state.shell.render(&params.inputs(), &params.session()).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => {
            tracing::error!("Render failed: {}", e);
            let provider_error = e.provider_error();
            let body = ApiError {
                error: e.to_string(),
                provider: provider_error.provider,
                kind: provider_error.kind,
                status: provider_error.status,
            };
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
    }
}
