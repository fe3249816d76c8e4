//! Roster handlers: list penguins, force a cache refresh.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::PenguinDto;
use crate::app_state::AppState;

/// `GET /penguins` — The roster with counters as of the last refresh.
///
/// Refreshes the counters from the store first when the cache TTL has
/// lapsed, so an occasional request pays for a full reconciliation.
#[utoipa::path(
    get,
    path = "/penguins",
    tag = "Penguins",
    summary = "List penguins",
    description = "Returns every penguin in roster order with its visit, fish and bellyrub counters. Counters are cached and reloaded from storage at most once per TTL.",
    responses(
        (status = 200, description = "Penguin roster", body = Vec<PenguinDto>),
    )
)]
pub async fn list_penguins(State(state): State<AppState>) -> impl IntoResponse {
    let penguins: Vec<PenguinDto> = state
        .penguin_service
        .list_penguins(Utc::now())
        .await
        .into_iter()
        .map(PenguinDto::from)
        .collect();
    Json(penguins)
}

/// `GET /update` — Mark the cache stale.
///
/// The next `GET /penguins` reloads every counter from storage.
#[utoipa::path(
    get,
    path = "/update",
    tag = "Penguins",
    summary = "Force cache refresh",
    description = "Marks the roster cache stale so the next roster read reloads all counters. Returns an empty body.",
    responses(
        (status = 200, description = "Cache marked stale"),
    )
)]
pub async fn update_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.penguin_service.force_refresh().await;
    StatusCode::OK
}

/// Roster routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/penguins", get(list_penguins))
        .route("/update", get(update_handler))
}
