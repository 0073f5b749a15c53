//! Lamsa Site - Main Library
//!
//! Backend for the Lamsa cleaning-services marketing site: a public JSON
//! API serving the site's content, a token-gated admin API for editing it,
//! and an upload relay to external blob storage.
//!
//! # Overview
//!
//! This library provides:
//! - Admin authentication with bcrypt-hashed credentials and signed
//!   bearer tokens (24-hour expiry, stateless)
//! - A single declarative admin gate over every mutating route
//! - CRUD handlers for articles, services, the before/after gallery, the
//!   animated slider, sticky-scroll sections and free-form site text
//! - A multipart upload relay returning public blob URLs
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── server/       - Configuration, state, initialization
//! ├── routes/       - Route table and router assembly
//! ├── auth/         - Credentials, tokens, login handlers
//! ├── middleware/   - Admin token gate
//! ├── content/      - One submodule per content type
//! ├── upload/       - Blob-store relay
//! └── error/        - Error taxonomy and response mapping
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and credential management
pub mod auth;

/// Request middleware
pub mod middleware;

/// Content resource handlers
pub mod content;

/// Upload relay
pub mod upload;

/// Error types
pub mod error;

pub use error::AppError;
pub use server::{create_app, AppState, ServerConfig};
