use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuestionRequest {
    pub question: String,
    /// Optional free-form context; accepted but not used when generating the answer.
    pub context: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssistantResponse {
    pub answer: String,
    pub confidence: f64,
    pub processing_time: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InfoResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Endpoints {
    pub health: String,
    pub ask: String,
    pub metrics: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MetricsResponse {
    pub requests_total: String,
    pub response_time_avg: String,
    pub health_status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
