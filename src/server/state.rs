/**
 * Application State
 *
 * This module defines the state shared by all request handlers. Every
 * field is a cheap clonable handle: the database pool, the token service
 * (keys built once at startup) and the blob store client. There is no
 * in-process mutable state; the database is the only shared mutable
 * resource.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::TokenService;
use crate::upload::storage::BlobStore;

/// Shared application state
///
/// # Fields
///
/// * `db` - PostgreSQL connection pool
/// * `tokens` - token issuer/verifier for the admin session
/// * `blob` - external blob-store client for the upload relay
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db: PgPool,
    /// Token issuer and verifier
    pub tokens: TokenService,
    /// Blob store client
    pub blob: BlobStore,
}

/// Allow handlers to extract the pool directly
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

/// Allow handlers to extract the token service directly
impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

/// Allow handlers to extract the blob store directly
impl FromRef<AppState> for BlobStore {
    fn from_ref(state: &AppState) -> Self {
        state.blob.clone()
    }
}
