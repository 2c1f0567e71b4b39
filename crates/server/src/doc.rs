use crate::routes::{ask, health, metrics, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(root::root, health::health, ask::ask_assistant, metrics::metrics),
    tags(
        (name = "Info", description = "API information"),
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Assistant", description = "Question answering endpoints"),
        (name = "Metrics", description = "Service metrics placeholders"),
    ),
    info(
        title = "AI Assistant API",
        version = "1.0.0",
        description = "A simple AI assistant for homelab demonstration",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
