use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for Docker/K8s liveness probes.
///
/// The relay holds no stateful resources, so this always reports ok.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "oasis-qa-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
