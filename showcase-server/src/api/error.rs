//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses with
//! appropriate HTTP status codes. The wire contract is a flat body:
//! `{ "error": message }`.

use showcase_core::CoreError;
use showcase_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400). The message is the client-facing text.
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Unsupported verb on a known route (405)
    #[error("Method not allowed {location}")]
    MethodNotAllowed { location: ErrorLocation },

    /// Unknown path (404)
    #[error("Not found {location}")]
    NotFound { location: ErrorLocation },

    /// Store failure (500). The message is already client-safe; the
    /// underlying detail is logged at the conversion site.
    #[error("Store failure: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::MethodNotAllowed { .. } => (
                StatusCode::METHOD_NOT_ALLOWED,
                String::from("Method not allowed"),
            ),
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, String::from("Not found")),
            ApiError::Store { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                String::from("Internal server error"),
            ),
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Convert validation outcomes to the exact client-facing messages
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let message = match e {
            CoreError::MissingFields { .. } => "Missing required fields",
            CoreError::FieldTooLong { .. } => "Field too long",
            CoreError::NoValidTags { .. } | CoreError::InvalidTag { .. } => "Invalid tags",
        };

        ApiError::Validation {
            message: String::from(message),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        // Don't expose store internals (URLs, command details) to clients
        log::error!("Store error: {}", e);
        ApiError::Store {
            message: String::from("Store operation failed"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
