//! Authentication HTTP Handlers
//!
//! Handlers for the auth endpoints:
//!
//! - `POST /api/login` - password check, token issuance (public)
//! - `POST /api/change-password` - credential rotation (token required)

/// Request/response types
pub mod types;

/// Login handler
pub mod login;

/// Password change handler
pub mod change_password;

pub use change_password::change_password;
pub use login::login;
