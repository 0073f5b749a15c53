//! Error Module
//!
//! This module defines the error types used across the server and their
//! mapping onto HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - The `AppError` enum and constructor helpers
//! - **`conversion`** - `IntoResponse` mapping onto JSON error bodies
//!
//! # Error Categories
//!
//! Every handler boundary maps its failures into one of four categories:
//!
//! - **Authentication failure** - 401 with a short, user-facing message
//! - **Validation failure** - 400 (missing required fields, malformed ids)
//! - **Not-found** - 404 (operating on a nonexistent row)
//! - **Infrastructure failure** - 500 with a generic message; the full
//!   error detail is logged server-side only
//!
//! Authentication checks fail closed: any ambiguity during verification is
//! treated as "not authorized".

/// Error enum and constructors
pub mod types;

/// HTTP response conversion
pub mod conversion;

pub use types::AppError;
