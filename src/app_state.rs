//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::PenguinService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Penguin service for roster reads and stat events.
    pub penguin_service: Arc<PenguinService>,
}

impl AppState {
    /// Wraps a [`PenguinService`] into handler state.
    #[must_use]
    pub fn new(penguin_service: PenguinService) -> Self {
        Self {
            penguin_service: Arc::new(penguin_service),
        }
    }
}
