use std::fmt::Display;
use std::time::Instant;

use axum::{Json, http::StatusCode};
use log::{error, info};
use rand::{Rng, seq::SliceRandom};
use tokio::time::{Duration, sleep};

use crate::dtos::assistant::{AssistantResponse, ErrorResponse, QuestionRequest};

/// Canned lead-ins; a real deployment would call a model here instead.
const RESPONSES: [&str; 5] = [
    "That's an interesting question! Let me think about it.",
    "Based on my knowledge, I would say...",
    "Great question! Here's what I think:",
    "I'd be happy to help with that!",
    "Let me provide some insights on that topic.",
];

/// Ask the assistant a question
#[utoipa::path(
    post,
    path = "/ask",
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Answer generated", body = AssistantResponse),
        (status = 422, description = "Missing or malformed request fields"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Assistant"
)]
pub async fn ask_assistant(
    Json(request): Json<QuestionRequest>,
) -> Result<Json<AssistantResponse>, (StatusCode, Json<ErrorResponse>)> {
    let start = Instant::now();

    info!("Received question: {}", request.question);

    // Simulated processing time; suspends only this request, never the runtime
    let delay = rand::thread_rng().gen_range(0.1..=0.5);
    sleep(Duration::from_secs_f64(delay)).await;

    let mut rng = rand::thread_rng();
    let lead_in = RESPONSES
        .choose(&mut rng)
        .ok_or_else(|| internal_error("response pool is empty"))?;
    let confidence = rng.gen_range(0.7..0.95);

    let answer = format!(
        "{lead_in} Regarding '{}', this is a demo response from the homelab assistant.",
        request.question
    );
    let processing_time = start.elapsed().as_secs_f64();

    info!("Generated response with confidence: {confidence:.2}");

    Ok(Json(AssistantResponse {
        answer,
        confidence,
        processing_time,
    }))
}

/// Logs the underlying error and maps it to a generic 500 response.
fn internal_error(err: impl Display) -> (StatusCode, Json<ErrorResponse>) {
    error!("Error processing question: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: "Internal server error".to_string(),
        }),
    )
}
