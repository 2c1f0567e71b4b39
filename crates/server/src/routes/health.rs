use axum::Json;
use chrono::Utc;

use crate::dtos::assistant::HealthResponse;

/// Health check endpoint for Kubernetes probes
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().timestamp_micros() as f64 / 1_000_000.0,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
