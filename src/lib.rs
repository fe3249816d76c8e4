//! # penguin-daycare
//!
//! HTTP backend for the Penguin Daycare Simulator.
//!
//! Serves a fixed roster of penguins loaded from a JSON file, decorated with
//! visit, fish and bellyrub counters kept in PostgreSQL. Counters are read
//! through a cache that is reconciled with the database at most once per
//! TTL; stat events write straight to the database and show up in the
//! roster after the next reconciliation.
//!
//! ## Architecture
//!
//! ```text
//! Mobile client (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PenguinService (service/)
//!     │
//!     ├── RosterCache (domain/)   ── RwLock { roster, last_refresh }
//!     │
//!     └── CounterStore (persistence/)
//!             ├── PostgreSQL
//!             └── in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
