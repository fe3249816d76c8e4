//! REST endpoint handlers organized by resource.

pub mod penguins;
pub mod stats;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes. Paths are served at the root, with no
/// version prefix, to match the mobile client.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(system::routes())
        .merge(penguins::routes())
        .merge(stats::routes())
}
