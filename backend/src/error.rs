//! Error handling for the Franchise NeXus backend
//!
//! Domain and repository failures are translated at the boundary into a small
//! HTTP taxonomy. Every failure produces a `{status, message}` body, except
//! validation failures which produce a field-to-message map. Internal detail
//! is logged, never returned to the caller.

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken,

    #[error("authentication required")]
    Unauthenticated,

    #[error("access denied")]
    Forbidden,

    // Registration errors
    #[error("email already in use")]
    EmailInUse,

    // Lookup errors
    #[error("{resource} not found with id: {id}")]
    NotFound { resource: &'static str, id: i64 },

    // Input errors
    #[error("validation failed")]
    Validation(HashMap<String, String>),

    // Database errors
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    // Internal errors
    #[error("internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Not-found error naming the entity that failed to resolve.
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        AppError::NotFound { resource, id }
    }

    /// Single-field validation error.
    pub fn validation(field: &str, message: &str) -> Self {
        let mut errors = HashMap::new();
        errors.insert(field.to_string(), message.to_string());
        AppError::Validation(errors)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "invalid value".to_string());
                (field.to_string(), message)
            })
            .collect();
        AppError::Validation(fields)
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Validation failures produce the field-keyed map directly.
        if let AppError::Validation(errors) = &self {
            tracing::debug!("validation failed: {:?}", errors);
            return (StatusCode::BAD_REQUEST, Json(errors.clone())).into_response();
        }

        let (status, message) = match &self {
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid email or password".to_string())
            }
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),
            AppError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Authentication required".to_string())
            }
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Access denied".to_string()),
            AppError::EmailInUse => {
                (StatusCode::BAD_REQUEST, "Error: Email is already in use!".to_string())
            }
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Database(_) | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
            AppError::Validation(_) => unreachable!(),
        };

        if status.is_server_error() {
            tracing::error!("request failed: {:?}", self);
        } else {
            tracing::debug!("request rejected: {:?}", self);
        }

        (
            status,
            Json(ErrorResponse {
                status: status.as_u16(),
                message,
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
