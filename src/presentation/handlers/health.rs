use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

const SERVICE_NAME: &str = "AgriLingo Analysis API";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ServiceInfoResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Liveness probe; independent of provider configuration.
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}

pub async fn root_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ServiceInfoResponse {
            message: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            status: "running",
        }),
    )
}
