//! Type-safe penguin identifier.
//!
//! [`PenguinId`] is a newtype wrapper around the roster's string id so that
//! penguin identifiers cannot be confused with names or other free text.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a penguin.
///
/// Assigned in the roster file and immutable thereafter. Used as the key
/// in the counter store and as the `id` parameter on stat endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PenguinId(String);

impl PenguinId {
    /// Creates a `PenguinId` from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PenguinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PenguinId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PenguinId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
