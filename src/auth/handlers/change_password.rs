/**
 * Password Change Handler
 *
 * This module implements POST /api/change-password. The route sits behind
 * the admin token gate; on top of that, the current password is re-verified
 * before the stored hash is replaced, so a leaked token alone cannot rotate
 * the credential.
 */

use axum::extract::State;
use axum::response::Json;

use crate::auth::credentials::{fetch_admin, hash_password, update_password_hash, verify_password};
use crate::auth::handlers::types::{ChangePasswordRequest, MessageResponse};
use crate::error::AppError;
use crate::server::state::AppState;

/// Password change handler
///
/// Verifies the current password, hashes the new one (bcrypt cost 10) and
/// overwrites the single credential row in place. No token is re-issued;
/// the client discards its token and logs in again.
///
/// # Errors
///
/// * `401 Unauthorized` - current password does not match (no mutation
///   occurs), or no admin credential is seeded
/// * `500 Internal Server Error` - database or hashing failure
pub async fn change_password(
    State(state): State<AppState>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let admin = fetch_admin(&state.db)
        .await?
        .ok_or_else(|| AppError::unauthorized("لم يتم العثور على مستخدم إداري"))?;

    let matches = verify_password(&request.current_password, &admin.password_hash)?;
    if !matches {
        tracing::warn!("password change rejected: current password mismatch");
        return Err(AppError::unauthorized("كلمة المرور الحالية غير صحيحة"));
    }

    let new_hash = hash_password(&request.new_password)?;
    update_password_hash(&state.db, admin.id, &new_hash).await?;

    tracing::info!(admin_id = admin.id, "admin password changed");

    Ok(Json(MessageResponse {
        message: "تم تغيير كلمة المرور بنجاح".to_string(),
    }))
}
