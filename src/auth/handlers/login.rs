/**
 * Login Handler
 *
 * This module implements the admin authentication handler for
 * POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Fetch the single stored admin credential
 * 2. Verify the candidate password with bcrypt
 * 3. Issue a signed token with a 24-hour expiry
 * 4. Return the token for client-side storage
 *
 * # Security
 *
 * - The candidate password is never logged
 * - Missing admin row and wrong password both return 401
 * - Lookup or comparison errors fail closed (never "authenticated")
 */

use axum::extract::State;
use axum::response::Json;

use crate::auth::credentials::{fetch_admin, verify_password};
use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the posted password against the stored hash and returns a
/// signed bearer token on success.
///
/// # Errors
///
/// * `401 Unauthorized` - no admin credential is seeded, or the password
///   does not match
/// * `500 Internal Server Error` - database, bcrypt or token-construction
///   failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let admin = fetch_admin(&state.db)
        .await?
        .ok_or_else(|| AppError::unauthorized("لم يتم العثور على مستخدم إداري"))?;

    let matches = verify_password(request.password.trim(), &admin.password_hash)?;
    if !matches {
        tracing::warn!("login rejected: password mismatch");
        return Err(AppError::unauthorized("كلمة المرور غير صحيحة"));
    }

    let token = state.tokens.issue(admin.id)?;
    tracing::info!(admin_id = admin.id, "admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        token,
        message: "تم تسجيل الدخول بنجاح".to_string(),
    }))
}
