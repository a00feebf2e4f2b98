use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use models::ModelError;
use service::auth::AuthError;
use service::ServiceError;

/// Client-facing error shape. Every variant serializes to the wire body
/// `{"error": true, "message": ...}` the frontend expects.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed, or expired credential.
    #[error("Unauthorized access")]
    Unauthorized,
    /// Authenticated, but the queried email does not match the identity.
    #[error("forbidden access")]
    Forbidden,
    /// Request-contract violation.
    #[error("{0}")]
    BadRequest(String),
    /// Store or serialization failure.
    #[error("internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(detail) => {
                error!(error = %detail, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(serde_json::json!({
            "error": true,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::BadRequest(msg),
            ServiceError::Model(ModelError::Validation(msg)) => ApiError::BadRequest(msg),
            ServiceError::Model(ModelError::Serialization(msg)) => ApiError::Internal(msg),
            ServiceError::NotFound(msg) => ApiError::BadRequest(msg),
            ServiceError::Store(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized => ApiError::Unauthorized,
            AuthError::Validation(msg) => ApiError::BadRequest(msg),
            AuthError::Token(msg) => ApiError::Internal(msg),
        }
    }
}
