// ============================
// authgate-backend-lib/src/error.rs
// ============================
//! Central error type + Axum integration.
use authgate_common::ApiMessage;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types with HTTP mappings
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token not provided")]
    MissingToken,

    #[error("Invalid authorization header format")]
    MalformedAuthHeader,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingCredentials => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials
            | AppError::MissingToken
            | AppError::MalformedAuthHeader
            | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Config(_)
            | AppError::Io(_)
            | AppError::Json(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a sanitized message suitable for production use.
    ///
    /// The 401 variants already share deliberately generic wording, so
    /// only server-side failures need their detail stripped.
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::Config(_)
            | AppError::Io(_)
            | AppError::Json(_)
            | AppError::Internal(_) => "An internal server error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Use detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        (status, axum::Json(ApiMessage::new(message))).into_response()
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Internal(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }
}
