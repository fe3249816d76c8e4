//! System endpoints: greeting and health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::HealthResponse;
use crate::app_state::AppState;

/// `GET /` — Plain-text greeting with the roster size.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Greeting",
    description = "Returns a plain-text welcome message including the number of penguins loaded.",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain"),
    )
)]
pub async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let loaded = state.penguin_service.roster_size().await;
    format!("Hello! This is Penguin Daycare Simulator backend! Number of penguins loaded: {loaded}")
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, roster size and the last cache refresh.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let roster = state.penguin_service.roster();
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            penguins: roster.len().await,
            last_refresh: roster.last_refresh().await.map(|t| t.to_rfc3339()),
        }),
    )
}

/// System routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}
