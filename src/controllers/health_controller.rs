use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::AppState;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn health_db(State(state): State<AppState>) -> impl IntoResponse {
    let backend = state.storage.backend_name();
    match state.storage.ping().await {
        Ok(()) => (StatusCode::OK, format!("{backend}: ok")).into_response(),
        Err(e) => {
            tracing::error!(error = %e, backend, "storage ping failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{backend}: unavailable"),
            )
                .into_response()
        }
    }
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
