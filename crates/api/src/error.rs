//! Unified error handling at the handler boundary.
//!
//! Provides a unified `AppError` type that converts every failure into the
//! JSON error envelope `{"error": {"<Kind>": "<message>"}}` with an
//! appropriate HTTP status. All route handlers should return
//! `Result<T, AppError>`. No error here is fatal to the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Record store operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client did not present the correct api key.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The envelope key naming the kind of error.
    const fn kind(&self) -> &'static str {
        match self {
            Self::Repository(err) => match err {
                RepositoryError::NotFound | RepositoryError::EmptyStore => "Not Found",
                RepositoryError::DuplicateName(_) => "Conflict",
                RepositoryError::Database(_) => "Internal Server Error",
            },
            Self::NotFound(_) => "Not Found",
            Self::Unauthorized(_) => "Unauthorized",
            Self::BadRequest(_) => "Bad Request",
            Self::Internal(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with full detail before the message is scrubbed
        if matches!(
            self,
            Self::Internal(_) | Self::Repository(RepositoryError::Database(_))
        ) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Repository(err) => match err {
                RepositoryError::NotFound | RepositoryError::EmptyStore => StatusCode::NOT_FOUND,
                RepositoryError::DuplicateName(_) => StatusCode::CONFLICT,
                RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) | Self::Repository(RepositoryError::Database(_)) => {
                "Something went wrong on our end.".to_string()
            }
            Self::Repository(RepositoryError::NotFound) => {
                "Sorry, a cafe with that id was not found in the database.".to_string()
            }
            Self::Repository(RepositoryError::EmptyStore) => {
                "Sorry, there are no cafes in the database.".to_string()
            }
            Self::Repository(RepositoryError::DuplicateName(name)) => {
                format!("Sorry, a cafe named '{name}' already exists.")
            }
            Self::NotFound(msg) | Self::Unauthorized(msg) | Self::BadRequest(msg) => msg.clone(),
        };

        let kind = self.kind();
        let body = Json(json!({ "error": { kind: message } }));

        (status, body).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("cafe-123".to_string());
        assert_eq!(err.to_string(), "Not found: cafe-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Repository(RepositoryError::EmptyStore)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Repository(RepositoryError::DuplicateName(
                "Grind".to_string()
            ))),
            StatusCode::CONFLICT
        );
    }

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = AppError::NotFound("Sorry, nothing here.".to_string()).into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["Not Found"], "Sorry, nothing here.");
    }

    #[tokio::test]
    async fn test_internal_error_details_not_leaked() {
        let response = AppError::Internal("connection string was leaked?!".to_string())
            .into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(!body.contains("connection string"));
        assert!(body.contains("Internal Server Error"));
    }
}
