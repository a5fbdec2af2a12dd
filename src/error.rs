//! Error types for the HTTP handlers.
//!
//! Every variant maps to a 500 with a fixed plain-text body. The detailed
//! error is written to the log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

#[cfg(test)]
mod tests;

/// Body returned for failed page and API requests.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Body returned when the health check fails.
pub const HEALTH_CHECK_FAILED_BODY: &str = "Database health check failed";

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The database rejected or failed to run a query.
    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),

    /// A row did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[source] sqlx::Error),

    /// Rendering the HTML template failed.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// The liveness query failed.
    #[error("Health check query failed: {0}")]
    HealthCheck(#[source] sqlx::Error),

    /// The liveness query returned something other than 1.
    #[error("Unexpected health check result: {0}")]
    UnexpectedProbeResult(i32),
}

impl ApiError {
    fn public_body(&self) -> &'static str {
        match self {
            ApiError::HealthCheck(_) | ApiError::UnexpectedProbeResult(_) => {
                HEALTH_CHECK_FAILED_BODY
            }
            ApiError::Query(_) | ApiError::Decode(_) | ApiError::Template(_) => {
                INTERNAL_ERROR_BODY
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.public_body()).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::TypeNotFound { .. } => ApiError::Decode(err),
            other => ApiError::Query(other),
        }
    }
}
