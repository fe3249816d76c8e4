//! Domain layer: penguin identity, roster loading, and the roster cache.
//!
//! This module contains the server-side domain model: the penguin record
//! with its stat counters, the roster file loader, and the read-through
//! [`RosterCache`] that reconciles the roster with the counter store.

pub mod penguin;
pub mod penguin_id;
pub mod roster;
pub mod roster_cache;

pub use penguin::{Penguin, StatCounters, StatKind};
pub use penguin_id::PenguinId;
pub use roster_cache::{RefreshOutcome, RosterCache};
