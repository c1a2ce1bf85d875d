use axum::{http::StatusCode, response::IntoResponse};

/// Liveness probe; does not touch the engine or the voice catalog
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
