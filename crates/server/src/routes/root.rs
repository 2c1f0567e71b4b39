use axum::Json;

use crate::dtos::assistant::{Endpoints, InfoResponse};

/// Root endpoint describing the API and its routes
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API information", body = InfoResponse)
    ),
    tag = "Info"
)]
pub async fn root() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "AI Assistant API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            health: "/health".to_string(),
            ask: "/ask (POST)".to_string(),
            metrics: "/metrics".to_string(),
        },
    })
}
