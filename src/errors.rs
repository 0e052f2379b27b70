//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

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
    // Authentication
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Token verification
    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is malformed")]
    MalformedToken,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("Malformed identifier: {0}")]
    MalformedId(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Credential error")]
    Credential(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::InvalidSignature | AppError::TokenExpired | AppError::MalformedToken => {
                "INVALID_TOKEN"
            }
            AppError::NotFound => "NOT_FOUND",
            AppError::MalformedId(_) => "MALFORMED_ID",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Credential(_) => "CREDENTIAL_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized
            | AppError::InvalidCredentials
            | AppError::InvalidSignature
            | AppError::TokenExpired
            | AppError::MalformedToken => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MalformedId(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Credential(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),

            AppError::InvalidSignature | AppError::TokenExpired | AppError::MalformedToken => {
                tracing::debug!("Token rejected: {}", self);
                "Invalid or expired token".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Credential(msg) => {
                tracing::error!("Credential error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }

    /// Collapse an unknown-account failure into `InvalidCredentials`.
    ///
    /// Login callers must not be able to tell an unknown email from a wrong
    /// password.
    pub fn conceal_not_found(self) -> Self {
        match self {
            AppError::NotFound => AppError::InvalidCredentials,
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn credential(msg: impl Into<String>) -> Self {
        AppError::Credential(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::TokenExpired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::validation("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::credential("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_conceal_not_found() {
        assert!(matches!(
            AppError::NotFound.conceal_not_found(),
            AppError::InvalidCredentials
        ));
        assert!(matches!(
            AppError::validation("x").conceal_not_found(),
            AppError::Validation(_)
        ));
    }

    #[test]
    fn test_ok_or_not_found() {
        let missing: Option<i32> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
    }
}
