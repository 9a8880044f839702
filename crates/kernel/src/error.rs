//! Application error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::content::{BlockParseError, EditorError};
use crate::models::AuthError;
use crate::services::publish::BundleError;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("access denied")]
    Forbidden,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn login_required() -> Self {
        Self::Unauthorized("login required".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal details are logged, never returned
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal server error");
                "internal server error".to_string()
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "success": false, "error": message }))).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AlreadyExists => AppError::Conflict(err.to_string()),
            AuthError::InvalidCredentials => AppError::Unauthorized(err.to_string()),
            AuthError::Internal(e) => AppError::Internal(e),
        }
    }
}

impl From<BundleError> for AppError {
    fn from(err: BundleError) -> Self {
        match err {
            BundleError::Internal(e) => AppError::Internal(e),
            BundleError::ThemeNotFound => AppError::BadRequest(err.to_string()),
            BundleError::WebsiteNotFound | BundleError::NoPages => {
                AppError::NotFound(err.to_string())
            }
        }
    }
}

impl From<EditorError> for AppError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::UnknownComponent(_) => AppError::NotFound(err.to_string()),
            EditorError::TypeMismatch { .. }
            | EditorError::DuplicateComponent(_)
            | EditorError::IdExhausted(_) => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<BlockParseError> for AppError {
    fn from(err: BlockParseError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
