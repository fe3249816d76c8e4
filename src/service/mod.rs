//! Service layer: business logic orchestration.
//!
//! [`PenguinService`] ties the [`super::domain::RosterCache`] to the
//! [`super::persistence::CounterStore`] and implements the roster read
//! and stat increment operations used by the HTTP handlers.

pub mod penguin_service;

pub use penguin_service::{PenguinService, StatOutcome};
