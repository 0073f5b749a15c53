/**
 * Error Response Conversion
 *
 * This module maps `AppError` variants onto HTTP responses. All error
 * responses share the `{"error": "<message>"}` body shape so clients can
 * handle them uniformly.
 *
 * Infrastructure failures (database, hashing, token construction, blob
 * storage) are logged with their full detail and replaced by a generic
 * client message so internal state never leaks into responses.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::error::types::AppError;

/// Generic client-facing message for infrastructure failures
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized { message } => {
                tracing::warn!("request rejected: {}", message);
                (StatusCode::UNAUTHORIZED, message)
            }
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Storage { detail } => {
                tracing::error!("blob storage error: {}", detail);
                // Upload failures keep the product's own message
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "فشل في رفع الملف.".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Hash(e) => {
                tracing::error!("password hashing error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Token(e) => {
                tracing::error!("token construction error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Multipart(e) => {
                tracing::warn!("malformed multipart body: {:?}", e);
                (StatusCode::BAD_REQUEST, "Invalid upload request".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
