/**
 * Animated Slider
 *
 * Row model, database operations and HTTP handlers for the hero slider.
 * The public GET returns a composite object: the active slides plus the
 * section heading and call-to-action strings, which live in `site_content`
 * under the `animated_slider_*` keys.
 *
 * Slide captions are a typed list of strings, validated at the write
 * boundary instead of being stored as a free-form blob.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlJson;
use sqlx::PgPool;

use crate::content::site_text::fetch_values;
use crate::content::{DeleteRequest, DeletedResponse};
use crate::error::AppError;
use crate::server::state::AppState;

const TITLE_KEY: &str = "animated_slider_title";
const CTA_TEXT_KEY: &str = "animated_slider_cta_text";
const CTA_LINK_KEY: &str = "animated_slider_cta_link";

/// A slide row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Slide {
    /// Row id
    pub id: i32,
    /// Slide image URL
    pub img_url: String,
    /// Ordered caption lines rendered over the image
    pub texts: SqlJson<Vec<String>>,
    /// Display position (ascending)
    pub sort_order: i32,
    /// Hidden from the public slider when false
    pub is_active: bool,
}

/// Fields accepted when creating or updating a slide
#[derive(Debug, Deserialize, Serialize)]
pub struct SlidePayload {
    pub img_url: String,
    pub texts: Vec<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Update request: the row id plus the full replacement payload
#[derive(Debug, Deserialize)]
pub struct SlideUpdate {
    pub id: i32,
    #[serde(flatten)]
    pub fields: SlidePayload,
}

fn default_active() -> bool {
    true
}

/// Composite response for the public slider section
#[derive(Debug, Serialize)]
pub struct SliderSection {
    /// Active slides in display order
    pub slides: Vec<Slide>,
    /// Section heading
    pub title: String,
    /// Call-to-action label
    #[serde(rename = "ctaText")]
    pub cta_text: String,
    /// Call-to-action target
    #[serde(rename = "ctaLink")]
    pub cta_link: String,
}

const COLUMNS: &str = "id, img_url, texts, sort_order, is_active";

/// Load active slides ordered for display
pub async fn fetch_slides(pool: &PgPool) -> Result<Vec<Slide>, sqlx::Error> {
    sqlx::query_as::<_, Slide>(&format!(
        "SELECT {COLUMNS} FROM animated_slides \
         WHERE is_active = TRUE ORDER BY sort_order ASC, id ASC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn insert_slide(pool: &PgPool, payload: &SlidePayload) -> Result<Slide, sqlx::Error> {
    sqlx::query_as::<_, Slide>(&format!(
        "INSERT INTO animated_slides (img_url, texts, sort_order, is_active) \
         VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
    ))
    .bind(&payload.img_url)
    .bind(SqlJson(&payload.texts))
    .bind(payload.sort_order)
    .bind(payload.is_active)
    .fetch_one(pool)
    .await
}

pub async fn update_slide(
    pool: &PgPool,
    id: i32,
    payload: &SlidePayload,
) -> Result<Option<Slide>, sqlx::Error> {
    sqlx::query_as::<_, Slide>(&format!(
        "UPDATE animated_slides SET img_url = $1, texts = $2, sort_order = $3, is_active = $4 \
         WHERE id = $5 RETURNING {COLUMNS}"
    ))
    .bind(&payload.img_url)
    .bind(SqlJson(&payload.texts))
    .bind(payload.sort_order)
    .bind(payload.is_active)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_slide(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM animated_slides WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// `GET /api/animated-slider` - public composite section
///
/// Missing `site_content` keys fall back to the section defaults.
pub async fn section(State(state): State<AppState>) -> Result<Json<SliderSection>, AppError> {
    let slides = fetch_slides(&state.db).await?;
    let mut content = fetch_values(&state.db, &[TITLE_KEY, CTA_TEXT_KEY, CTA_LINK_KEY]).await?;

    Ok(Json(SliderSection {
        slides,
        title: content
            .remove(TITLE_KEY)
            .unwrap_or_else(|| "Default Title".to_string()),
        cta_text: content
            .remove(CTA_TEXT_KEY)
            .unwrap_or_else(|| "Contact Us".to_string()),
        cta_link: content
            .remove(CTA_LINK_KEY)
            .unwrap_or_else(|| "#contact".to_string()),
    }))
}

/// `POST /api/animated-slider` - create a slide (token required)
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SlidePayload>,
) -> Result<(StatusCode, Json<Slide>), AppError> {
    let slide = insert_slide(&state.db, &payload).await?;
    tracing::info!(id = slide.id, "slide created");
    Ok((StatusCode::CREATED, Json(slide)))
}

/// `PUT /api/animated-slider` - update a slide (token required)
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<SlideUpdate>,
) -> Result<Json<Slide>, AppError> {
    let slide = update_slide(&state.db, request.id, &request.fields)
        .await?
        .ok_or_else(|| AppError::not_found("Item not found"))?;
    Ok(Json(slide))
}

/// `DELETE /api/animated-slider` - delete by body id (token required)
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<DeletedResponse>, AppError> {
    if !delete_slide(&state.db, request.id).await? {
        return Err(AppError::not_found("Item not found"));
    }
    tracing::info!(id = request.id, "slide deleted");
    Ok(Json(DeletedResponse::item()))
}
