/**
 * Administrator Credential Store
 *
 * This module handles the single administrative credential and its bcrypt
 * comparison. The `admin_users` table holds exactly one authoritative row;
 * queries take the first row ordered by id, and the row is only ever
 * mutated in place by the password-change operation.
 */

use sqlx::PgPool;

/// bcrypt cost factor used when writing a new hash
pub const BCRYPT_COST: u32 = 10;

/// The stored administrator credential
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminCredential {
    /// Row id, used as the token subject
    pub id: i32,
    /// bcrypt hash of the admin password
    pub password_hash: String,
}

/// Fetch the authoritative admin credential
///
/// Returns `None` when the table is empty (no admin has been seeded yet).
pub async fn fetch_admin(pool: &PgPool) -> Result<Option<AdminCredential>, sqlx::Error> {
    sqlx::query_as::<_, AdminCredential>(
        "SELECT id, password_hash FROM admin_users ORDER BY id ASC LIMIT 1",
    )
    .fetch_optional(pool)
    .await
}

/// Replace the stored password hash in place
pub async fn update_password_hash(
    pool: &PgPool,
    admin_id: i32,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE admin_users SET password_hash = $1 WHERE id = $2")
        .bind(password_hash)
        .bind(admin_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Compare a candidate password against the stored hash
///
/// The plaintext is never logged or echoed. Comparison errors propagate as
/// errors, never as a successful match.
pub fn verify_password(candidate: &str, password_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(candidate, password_hash)
}

/// Hash a new password with the standard cost factor
pub fn hash_password(plain: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, BCRYPT_COST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("correct-pw").unwrap();
        assert!(verify_password("correct-pw", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("correct-pw").unwrap();
        let b = hash_password("correct-pw").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("anything", "not-a-bcrypt-hash").is_err());
    }
}
