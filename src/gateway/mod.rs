//! HTTP gateway (Axum) for the plagiarism-checking pipeline.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use handler::{CheckResponse, check_plagiarism_handler};
pub use state::HandlerState;

pub fn create_router_with_state(state: HandlerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/check-plagiarism/", post(check_plagiarism_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Builds the CORS layer for the configured frontend origins.
///
/// Origins that fail to parse as header values are skipped with a warning
/// rather than failing startup.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

#[derive(serde::Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /` — service identity payload.
#[tracing::instrument]
pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Veracity Plagiarism Checker API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

/// `GET /health` — liveness payload.
#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
