//! Authentication Module
//!
//! This module handles the admin login flow, bearer-token sessions and the
//! password-change operation.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`credentials`** - The single admin credential and bcrypt comparison
//! - **`sessions`** - Token issuance and verification
//! - **`handlers`** - HTTP handlers for login and password change
//!
//! # Authentication Flow
//!
//! 1. **Login**: admin posts the password → stored hash compared with
//!    bcrypt → signed token returned
//! 2. **Mutations**: the client attaches `Authorization: Bearer <token>`;
//!    the gate in `middleware::auth` verifies it before any handler runs
//! 3. **Password change**: token required; current password re-verified
//!    before the stored hash is replaced
//!
//! # Security
//!
//! - Passwords are stored as salted bcrypt hashes (cost factor 10)
//! - Tokens are stateless, signed with HS256 and expire after 24 hours
//! - Invalid credentials return 401 with a short message; hash values and
//!   signing material never appear in responses or logs
//! - There is no server-side revocation; logout is a client-side discard

/// Admin credential storage and bcrypt comparison
pub mod credentials;

/// Bearer-token issuance and verification
pub mod sessions;

/// HTTP handlers for the auth endpoints
pub mod handlers;

pub use handlers::types::{ChangePasswordRequest, LoginRequest, LoginResponse};
pub use handlers::{change_password, login};
pub use sessions::{AdminClaims, TokenService};
