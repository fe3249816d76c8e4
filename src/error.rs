//! Daycare error types with HTTP status code mapping.
//!
//! [`DaycareError`] is the central error type for the backend. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 3001,
///     "message": "persistence error: connection refused",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see [`DaycareError`] code ranges).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category | HTTP Status               |
/// |-----------|----------|---------------------------|
/// | 1000–1999 | Roster   | 500 (startup only)        |
/// | 3000–3999 | Server   | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum DaycareError {
    /// The roster file could not be read from disk.
    #[error("can't read roster {path}: {reason}")]
    RosterUnreadable {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The roster file is not a valid JSON roster.
    #[error("can't parse roster: {0}")]
    RosterMalformed(String),

    /// The roster parsed but violates a roster invariant (empty, duplicate ids).
    #[error("invalid roster: {0}")]
    InvalidRoster(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),
}

impl DaycareError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::RosterUnreadable { .. } => 1001,
            Self::RosterMalformed(_) => 1002,
            Self::InvalidRoster(_) => 1003,
            Self::PersistenceError(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    ///
    /// Roster errors only happen at startup, before the server binds, so
    /// every variant reaching a client is a server-side failure.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<sqlx::Error> for DaycareError {
    fn from(err: sqlx::Error) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

impl IntoResponse for DaycareError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
