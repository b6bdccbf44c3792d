//! Error handling - maps failures onto `{"error": ...}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use codeshare_core::DomainError;
use codeshare_shared::ErrorResponse;
use codeshare_shared::response::{CODE_NOT_FOUND, MISSING_FIELDS, PAYLOAD_TOO_LARGE, UNSUPPORTED_CATEGORY};
use std::fmt;

/// Application-level error type rendered as an [`ErrorResponse`].
///
/// Client-facing variants carry the exact message placed in the body.
/// `Internal` carries diagnostic detail that is logged, never returned.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    PayloadTooLarge,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::PayloadTooLarge => f.write_str(PAYLOAD_TOO_LARGE),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) => ErrorResponse::new(msg),
            AppError::PayloadTooLarge => ErrorResponse::new(PAYLOAD_TOO_LARGE),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingFields(_) => AppError::BadRequest(MISSING_FIELDS.to_string()),
            DomainError::UnsupportedCategory(_) => {
                AppError::BadRequest(UNSUPPORTED_CATEGORY.to_string())
            }
            DomainError::NotFound { .. } => AppError::NotFound(CODE_NOT_FOUND.to_string()),
            DomainError::Storage(e) => AppError::Internal(e.to_string()),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
