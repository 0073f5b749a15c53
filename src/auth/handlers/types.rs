/**
 * Authentication Handler Types
 *
 * Request and response types shared by the login and password-change
 * handlers.
 */

use serde::{Deserialize, Serialize};

/// Login request
///
/// The site has a single administrator, so login takes only a password.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Candidate admin password (compared against the stored hash)
    pub password: String,
}

/// Login response
///
/// Returned on successful authentication. The token is held client-side
/// and attached to subsequent mutating requests.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Always `true` on the success path
    pub success: bool,
    /// Signed bearer token (24-hour expiry)
    pub token: String,
    /// User-facing confirmation message
    pub message: String,
}

/// Password change request
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// The current password, re-verified before any mutation
    pub current_password: String,
    /// The replacement password, hashed before storage
    pub new_password: String,
}

/// Plain confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// User-facing confirmation message
    pub message: String,
}
