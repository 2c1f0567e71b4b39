mod doc;
mod dtos;
mod routes;
mod utils;

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::routes::{ask, health, metrics, root};
use crate::utils::shutdown::shutdown_signal;

fn app() -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/ask", post(ask::ask_assistant))
        .route("/metrics", get(metrics::metrics))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Running axum on http://{addr}");

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
