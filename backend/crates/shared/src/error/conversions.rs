//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::TimedOut => ErrorKind::RequestTimeout,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// MongoDB conversions (feature-gated)
// ============================================================================

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind as MongoKind, WriteFailure};

        // Duplicate key violations surface as conflicts; everything that
        // points at an unreachable or overloaded server maps to 503.
        let app_err = match err.kind.as_ref() {
            MongoKind::ServerSelection { .. } => {
                AppError::service_unavailable("Document store unreachable")
            }
            MongoKind::Io(_) => AppError::service_unavailable("Document store connection error"),
            MongoKind::Write(WriteFailure::WriteError(write_err)) if write_err.code == 11000 => {
                AppError::conflict("Duplicate key value")
            }
            MongoKind::Write(_) => AppError::internal("Document store write failed"),
            MongoKind::InvalidArgument { .. } => {
                AppError::bad_request("Invalid document store query")
            }
            MongoKind::Authentication { .. } => {
                AppError::internal("Document store authentication failed")
            }
            _ => AppError::internal("Document store error"),
        };
        app_err.with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
