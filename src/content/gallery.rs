/**
 * Before/After Gallery
 *
 * Row model, database operations and HTTP handlers for the before/after
 * photo pairs. The public list only returns active items, ordered by
 * `sort_order` then id.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::content::{DeleteRequest, DeletedResponse};
use crate::error::AppError;
use crate::server::state::AppState;

/// A gallery row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GalleryItem {
    /// Row id
    pub id: i32,
    /// Caption
    pub title: String,
    /// "Before" photo URL
    pub before_image_url: String,
    /// "After" photo URL
    pub after_image_url: String,
    /// Display position (ascending)
    pub sort_order: i32,
    /// Hidden from the public list when false
    pub is_active: bool,
}

/// Fields accepted when creating or updating a gallery item
#[derive(Debug, Deserialize, Serialize)]
pub struct GalleryPayload {
    pub title: String,
    pub before_image_url: String,
    pub after_image_url: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Update request: the row id plus the full replacement payload
#[derive(Debug, Deserialize)]
pub struct GalleryUpdate {
    pub id: i32,
    #[serde(flatten)]
    pub fields: GalleryPayload,
}

fn default_active() -> bool {
    true
}

const COLUMNS: &str = "id, title, before_image_url, after_image_url, sort_order, is_active";

/// Load active items ordered for display
pub async fn fetch_gallery(pool: &PgPool) -> Result<Vec<GalleryItem>, sqlx::Error> {
    sqlx::query_as::<_, GalleryItem>(&format!(
        "SELECT {COLUMNS} FROM before_after_gallery \
         WHERE is_active = TRUE ORDER BY sort_order ASC, id ASC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn insert_item(pool: &PgPool, payload: &GalleryPayload) -> Result<GalleryItem, sqlx::Error> {
    sqlx::query_as::<_, GalleryItem>(&format!(
        "INSERT INTO before_after_gallery (title, before_image_url, after_image_url, sort_order, is_active) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
    ))
    .bind(&payload.title)
    .bind(&payload.before_image_url)
    .bind(&payload.after_image_url)
    .bind(payload.sort_order)
    .bind(payload.is_active)
    .fetch_one(pool)
    .await
}

pub async fn update_item(
    pool: &PgPool,
    id: i32,
    payload: &GalleryPayload,
) -> Result<Option<GalleryItem>, sqlx::Error> {
    sqlx::query_as::<_, GalleryItem>(&format!(
        "UPDATE before_after_gallery SET title = $1, before_image_url = $2, \
         after_image_url = $3, sort_order = $4, is_active = $5 \
         WHERE id = $6 RETURNING {COLUMNS}"
    ))
    .bind(&payload.title)
    .bind(&payload.before_image_url)
    .bind(&payload.after_image_url)
    .bind(payload.sort_order)
    .bind(payload.is_active)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_item(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM before_after_gallery WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// `GET /api/before-after-gallery` - public active items
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<GalleryItem>>, AppError> {
    let items = fetch_gallery(&state.db).await?;
    Ok(Json(items))
}

/// `POST /api/before-after-gallery` - create an item (token required)
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<GalleryPayload>,
) -> Result<(StatusCode, Json<GalleryItem>), AppError> {
    let item = insert_item(&state.db, &payload).await?;
    tracing::info!(id = item.id, "gallery item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// `PUT /api/before-after-gallery` - update an item (token required)
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<GalleryUpdate>,
) -> Result<Json<GalleryItem>, AppError> {
    let item = update_item(&state.db, request.id, &request.fields)
        .await?
        .ok_or_else(|| AppError::not_found("Item not found"))?;
    Ok(Json(item))
}

/// `DELETE /api/before-after-gallery` - delete by body id (token required)
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<DeletedResponse>, AppError> {
    if !delete_item(&state.db, request.id).await? {
        return Err(AppError::not_found("Item not found"));
    }
    tracing::info!(id = request.id, "gallery item deleted");
    Ok(Json(DeletedResponse::item()))
}
