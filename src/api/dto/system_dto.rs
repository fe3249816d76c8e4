//! DTOs for the system endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` when the server answers.
    pub status: String,
    /// Server time (RFC 3339).
    pub timestamp: String,
    /// Crate version.
    pub version: String,
    /// Number of penguins on the roster.
    pub penguins: usize,
    /// Last roster refresh (RFC 3339), `null` while the roster is stale.
    pub last_refresh: Option<String>,
}
