/**
 * Site Text
 *
 * Key/value store for free-form site copy (headings, phone numbers,
 * call-to-action labels). The public GET folds the whole table into one
 * object; writes are upserts keyed by `content_key`.
 */

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::BTreeMap;

use crate::error::AppError;
use crate::server::state::AppState;

/// One site-content row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SiteText {
    /// Stable key referenced by the front end
    pub content_key: String,
    /// The copy itself
    pub content_value: String,
}

/// Upsert request with explicit presence validation
#[derive(Debug, Deserialize, Serialize)]
pub struct SiteTextPayload {
    pub content_key: Option<String>,
    pub content_value: Option<String>,
}

/// Load the whole table as a key/value map
pub async fn fetch_all(pool: &PgPool) -> Result<BTreeMap<String, String>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SiteText>("SELECT content_key, content_value FROM site_content")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| (row.content_key, row.content_value))
        .collect())
}

/// Load the values for a fixed set of keys
pub async fn fetch_values(
    pool: &PgPool,
    keys: &[&str],
) -> Result<BTreeMap<String, String>, sqlx::Error> {
    let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    let rows = sqlx::query_as::<_, SiteText>(
        "SELECT content_key, content_value FROM site_content WHERE content_key = ANY($1)",
    )
    .bind(&keys)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| (row.content_key, row.content_value))
        .collect())
}

/// Insert or replace one key/value pair, returning the stored row
pub async fn upsert_value(
    pool: &PgPool,
    content_key: &str,
    content_value: &str,
) -> Result<SiteText, sqlx::Error> {
    sqlx::query_as::<_, SiteText>(
        "INSERT INTO site_content (content_key, content_value) VALUES ($1, $2) \
         ON CONFLICT (content_key) DO UPDATE SET content_value = EXCLUDED.content_value \
         RETURNING content_key, content_value",
    )
    .bind(content_key)
    .bind(content_value)
    .fetch_one(pool)
    .await
}

/// `GET /api/site-content` - the whole table as one object
pub async fn list(State(state): State<AppState>) -> Result<Json<BTreeMap<String, String>>, AppError> {
    let content = fetch_all(&state.db).await?;
    Ok(Json(content))
}

/// `PUT /api/site-content` - upsert one pair (token required)
pub async fn upsert(
    State(state): State<AppState>,
    Json(payload): Json<SiteTextPayload>,
) -> Result<Json<SiteText>, AppError> {
    let (key, value) = match (payload.content_key, payload.content_value) {
        (Some(key), Some(value)) => (key, value),
        _ => {
            return Err(AppError::validation(
                "Missing content_key or content_value",
            ))
        }
    };

    let row = upsert_value(&state.db, &key, &value).await?;
    tracing::info!(content_key = %row.content_key, "site content updated");
    Ok(Json(row))
}
