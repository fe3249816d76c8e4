//! Stat event handlers: visit, fish, bellyrub.
//!
//! Each endpoint reads the penguin id from an urlencoded form body or the
//! query string, for GET and POST alike (see [`StatForm`]). Unknown ids
//! are accepted and ignored.
//! A store failure is returned as `500`, since the event was not recorded.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::api::dto::StatParams;
use crate::api::extract::StatForm;
use crate::app_state::AppState;
use crate::domain::StatKind;
use crate::error::{DaycareError, ErrorResponse};

async fn record(state: &AppState, params: StatParams, kind: StatKind) -> Result<StatusCode, DaycareError> {
    let id = params.penguin_id();
    state
        .penguin_service
        .record_stat(&id, kind)
        .await
        .map_err(|err| {
            tracing::warn!(%id, kind = kind.as_str(), error = %err, "stat event lost");
            err
        })?;
    Ok(StatusCode::OK)
}

/// `GET /stat/visit?id=<id>` — Count a visit.
///
/// # Errors
///
/// Returns [`DaycareError::PersistenceError`] if the store fails.
#[utoipa::path(
    get,
    path = "/stat/visit",
    tag = "Stats",
    summary = "Record a visit",
    description = "Increments the visit counter of the penguin. Unknown ids are ignored. Returns an empty body.",
    params(StatParams),
    responses(
        (status = 200, description = "Event accepted"),
        (status = 500, description = "Counter store failure", body = ErrorResponse),
    )
)]
pub async fn visit_handler(
    State(state): State<AppState>,
    StatForm(params): StatForm,
) -> Result<StatusCode, DaycareError> {
    record(&state, params, StatKind::Visit).await
}

/// `GET /stat/fish?id=<id>` — Count a fish fed.
///
/// # Errors
///
/// Returns [`DaycareError::PersistenceError`] if the store fails.
#[utoipa::path(
    get,
    path = "/stat/fish",
    tag = "Stats",
    summary = "Record a fish",
    description = "Increments the fish counter of the penguin. Unknown ids are ignored. Returns an empty body.",
    params(StatParams),
    responses(
        (status = 200, description = "Event accepted"),
        (status = 500, description = "Counter store failure", body = ErrorResponse),
    )
)]
pub async fn fish_handler(
    State(state): State<AppState>,
    StatForm(params): StatForm,
) -> Result<StatusCode, DaycareError> {
    record(&state, params, StatKind::Fish).await
}

/// `GET /stat/bellyrub?id=<id>` — Count a belly rub.
///
/// # Errors
///
/// Returns [`DaycareError::PersistenceError`] if the store fails.
#[utoipa::path(
    get,
    path = "/stat/bellyrub",
    tag = "Stats",
    summary = "Record a belly rub",
    description = "Increments the bellyrub counter of the penguin. Unknown ids are ignored. Returns an empty body.",
    params(StatParams),
    responses(
        (status = 200, description = "Event accepted"),
        (status = 500, description = "Counter store failure", body = ErrorResponse),
    )
)]
pub async fn bellyrub_handler(
    State(state): State<AppState>,
    StatForm(params): StatForm,
) -> Result<StatusCode, DaycareError> {
    record(&state, params, StatKind::Bellyrub).await
}

/// Stat routes. GET and POST are both accepted.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stat/visit", get(visit_handler).post(visit_handler))
        .route("/stat/fish", get(fish_handler).post(fish_handler))
        .route("/stat/bellyrub", get(bellyrub_handler).post(bellyrub_handler))
}
