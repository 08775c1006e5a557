//! Starstore Error Types
//!
//! This module provides store-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Store-specific result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-specific error variants
///
/// Validation variants are caught per batch item and reported in the
/// item's outcome; the remaining variants map to HTTP status codes via
/// `AppError` for request-level failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Card number has the wrong length (must be exactly 16 digits)
    #[error("Card number must be 16 digits, got {0}")]
    CardNumberLength(usize),

    /// Card number contains non-digit characters
    #[error("Card number must contain only digits")]
    CardNumberNotNumeric,

    /// A required field is absent from a batch item
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Whether this error is a per-item validation rejection
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::CardNumberLength(_)
                | StoreError::CardNumberNotNumeric
                | StoreError::MissingField(_)
        )
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::CardNumberLength(_)
            | StoreError::CardNumberNotNumeric
            | StoreError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            StoreError::Database(e) => match e.kind.as_ref() {
                mongodb::error::ErrorKind::ServerSelection { .. }
                | mongodb::error::ErrorKind::Io(_) => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            StoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::CardNumberLength(_)
            | StoreError::CardNumberNotNumeric
            | StoreError::MissingField(_) => ErrorKind::UnprocessableEntity,
            StoreError::Database(e) => match e.kind.as_ref() {
                mongodb::error::ErrorKind::ServerSelection { .. }
                | mongodb::error::ErrorKind::Io(_) => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            StoreError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            StoreError::Database(e) => {
                tracing::error!(error = %e, "Store database error");
            }
            StoreError::Internal(msg) => {
                tracing::error!(message = %msg, "Store internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Store validation error");
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(e) => AppError::from(e),
            err if err.is_validation() => AppError::new(err.kind(), err.to_string())
                .with_action("Resubmit the item with all required fields and a 16-digit card number"),
            err => AppError::new(err.kind(), err.to_string()),
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
