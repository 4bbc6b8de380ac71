//! Waitlist error types with HTTP status code mapping.
//!
//! [`WaitlistError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and a flat JSON error body that the
//! signup form can display directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Message returned for every internal failure. Store details stay in logs.
pub const GENERIC_SERVER_ERROR: &str = "Server error. Please try again.";

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": "Invalid email format",
///   "code": 1002
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Numeric error code (see code ranges on [`WaitlistError`]).
    pub code: u32,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Conflict   | 409 Conflict              |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    /// `name` or `email` absent, blank, or the body is not a JSON object.
    #[error("Name and email are required")]
    MissingFields,

    /// Email does not match the accepted syntax.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Name is present but unusable (e.g. too long).
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// An entry with the same normalized email already exists.
    #[error("Email already registered")]
    DuplicateEmail,

    /// Store failure (connectivity, query, transaction).
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WaitlistError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::MissingFields => 1001,
            Self::InvalidEmail => 1002,
            Self::InvalidName(_) => 1003,
            Self::DuplicateEmail => 2001,
            Self::PersistenceError(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::InvalidEmail | Self::InvalidName(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns `true` for failures caused by the server rather than the client.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::PersistenceError(_) | Self::Internal(_))
    }

    /// Message safe to show to the caller.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.is_internal() {
            GENERIC_SERVER_ERROR.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<sqlx::Error> for WaitlistError {
    fn from(err: sqlx::Error) -> Self {
        let unique_violation = err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation());
        if unique_violation {
            Self::DuplicateEmail
        } else {
            Self::PersistenceError(err.to_string())
        }
    }
}

impl From<sqlx::migrate::MigrateError> for WaitlistError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::PersistenceError(format!("migration failed: {err}"))
    }
}

impl IntoResponse for WaitlistError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, code = self.error_code(), "request failed");
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.public_message(),
            code: self.error_code(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
