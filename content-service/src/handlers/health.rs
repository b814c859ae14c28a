use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

/// Liveness probe. Does not contact the upstream model.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "content-service",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.content.provider().model()
    }))
}

/// Readiness probe: the upstream model must answer.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.content.provider().health_check().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Upstream model not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
