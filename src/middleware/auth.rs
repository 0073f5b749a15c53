/**
 * Admin Token Gate
 *
 * Middleware protecting every mutating route. It extracts the bearer token
 * from the `Authorization` header, verifies signature and expiry, and
 * short-circuits with 401 before the inner handler (and any database work)
 * runs.
 *
 * The gate is applied once, declaratively, at route registration; no
 * handler re-implements the check.
 */

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::sessions::{AdminClaims, TokenService};
use crate::error::AppError;
use crate::server::state::AppState;

/// User-facing message for every gate rejection
///
/// Missing header, wrong scheme, bad signature and expired token are all
/// reported identically.
const UNAUTHORIZED_MESSAGE: &str = "غير مسموح لك بتنفيذ هذا الإجراء";

/// Admin gate middleware
///
/// Per request: `NoToken -> Rejected`; `TokenPresent -> Valid | Rejected`.
/// Each request is verified independently; there is no session state. On
/// success the verified claims are attached to request extensions for
/// handlers that want the admin id.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authorize(&state.tokens, request.headers())?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Verify the `Authorization` header against the token service
///
/// Fails closed: any parsing or verification error maps to the same 401,
/// and nothing propagates as an internal error.
pub fn authorize(tokens: &TokenService, headers: &HeaderMap) -> Result<AdminClaims, AppError> {
    let token =
        bearer_token(headers).ok_or_else(|| AppError::unauthorized(UNAUTHORIZED_MESSAGE))?;

    tokens.verify(token).map_err(|e| {
        tracing::warn!("token rejected: {:?}", e.kind());
        AppError::unauthorized(UNAUTHORIZED_MESSAGE)
    })
}

/// Extract the token from a `Bearer <token>` authorization header
///
/// Any other form (missing header, non-UTF-8 value, wrong scheme) yields
/// `None` and is treated exactly like a missing header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}
