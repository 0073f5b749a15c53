/**
 * Server Error Types
 *
 * This module defines the error type returned by all HTTP handlers.
 * Each variant corresponds to one error category from the response
 * taxonomy; infrastructure variants carry their source error for
 * server-side logging and never expose it to clients.
 */

use thiserror::Error;

/// Error type returned by every HTTP handler
///
/// Handlers return `Result<_, AppError>` and rely on `?` to propagate
/// database, hashing and token failures. The `IntoResponse` impl in
/// `error::conversion` maps each variant to an HTTP status and a JSON
/// `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failure (bad/missing/expired/malformed token, wrong password)
    ///
    /// Always surfaces as HTTP 401 with a short, user-facing message.
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// User-facing error message
        message: String,
    },

    /// Validation failure (missing required fields, malformed request body)
    #[error("validation failure: {message}")]
    Validation {
        /// User-facing error message
        message: String,
    },

    /// The requested row does not exist
    #[error("not found: {message}")]
    NotFound {
        /// User-facing error message
        message: String,
    },

    /// Blob-storage provider failure during an upload
    ///
    /// Surfaces as a generic 500; the provider detail is logged only.
    #[error("storage error: {detail}")]
    Storage {
        /// Provider-side detail, never returned to the client
        detail: String,
    },

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or comparison error
    #[error("bcrypt error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token construction error
    ///
    /// Verification failures never reach this variant; the auth gate maps
    /// them to `Unauthorized` before they can propagate.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Malformed multipart body
    #[error("multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl AppError {
    /// Create an authentication failure with a user-facing message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a validation failure with a user-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found failure with a user-facing message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a storage failure carrying provider detail for the log
    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }
}
