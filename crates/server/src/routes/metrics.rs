use axum::Json;

use crate::dtos::assistant::MetricsResponse;

/// Placeholder metrics endpoint; a production deployment would export
/// Prometheus metrics instead
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Placeholder metrics", body = MetricsResponse)
    ),
    tag = "Metrics"
)]
pub async fn metrics() -> Json<MetricsResponse> {
    Json(MetricsResponse {
        requests_total: "counter_would_go_here".to_string(),
        response_time_avg: "histogram_would_go_here".to_string(),
        health_status: "healthy".to_string(),
    })
}
