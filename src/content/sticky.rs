/**
 * Sticky-Scroll Sections
 *
 * Row model, database operations and HTTP handlers for the two
 * sticky-scroll sections (standard and reversed layout). Both share one
 * schema over separate tables, so the database operations take a variant
 * and the routes bind thin per-variant handlers.
 *
 * The description column is a typed, ordered list of highlight/detail
 * pairs, validated when written instead of stored as an arbitrary blob.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlJson;
use sqlx::PgPool;

use crate::content::{DeleteRequest, DeletedResponse};
use crate::error::AppError;
use crate::server::state::AppState;

/// One description line: a bolded lead-in and its detail text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DescriptionItem {
    /// Bolded lead-in
    pub highlight: String,
    /// Detail text
    pub detail: String,
}

/// Which sticky-scroll table an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyVariant {
    /// Image left, text right
    Standard,
    /// Mirrored layout
    Reversed,
}

impl StickyVariant {
    fn table(self) -> &'static str {
        match self {
            StickyVariant::Standard => "sticky_scroll_content",
            StickyVariant::Reversed => "sticky_scroll_reversed_content",
        }
    }
}

/// A sticky-scroll section row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StickySection {
    /// Row id
    pub id: i32,
    /// Section heading
    pub title: String,
    /// Ordered highlight/detail pairs
    pub description: SqlJson<Vec<DescriptionItem>>,
    /// Section image URL
    pub image_url: String,
    /// Display position (ascending)
    pub sort_order: i32,
    /// Hidden from the public list when false
    pub is_active: bool,
}

/// Create request with explicit presence validation
///
/// Fields are optional at the serde layer so that a missing field produces
/// the endpoint's own 400 message rather than a body-rejection.
#[derive(Debug, Deserialize, Serialize)]
pub struct StickyPayload {
    pub title: Option<String>,
    pub description: Option<Vec<DescriptionItem>>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Update request: create payload plus the row id
#[derive(Debug, Deserialize)]
pub struct StickyUpdate {
    pub id: Option<i32>,
    #[serde(flatten)]
    pub fields: StickyPayload,
}

fn default_active() -> bool {
    true
}

/// Validated section fields after presence checks
pub struct StickyFields {
    pub title: String,
    pub description: Vec<DescriptionItem>,
    pub image_url: String,
    pub sort_order: i32,
    pub is_active: bool,
}

impl StickyPayload {
    /// Enforce the required fields, mirroring the write contract
    pub fn into_fields(self) -> Result<StickyFields, AppError> {
        match (self.title, self.description, self.image_url) {
            (Some(title), Some(description), Some(image_url)) => Ok(StickyFields {
                title,
                description,
                image_url,
                sort_order: self.sort_order,
                is_active: self.is_active,
            }),
            _ => Err(AppError::validation(
                "Missing required fields: title, description, image_url",
            )),
        }
    }
}

const COLUMNS: &str = "id, title, description, image_url, sort_order, is_active";

/// Load active sections ordered for display
pub async fn fetch_sections(
    pool: &PgPool,
    variant: StickyVariant,
) -> Result<Vec<StickySection>, sqlx::Error> {
    sqlx::query_as::<_, StickySection>(&format!(
        "SELECT {COLUMNS} FROM {} WHERE is_active = TRUE ORDER BY sort_order ASC",
        variant.table()
    ))
    .fetch_all(pool)
    .await
}

pub async fn insert_section(
    pool: &PgPool,
    variant: StickyVariant,
    fields: &StickyFields,
) -> Result<StickySection, sqlx::Error> {
    sqlx::query_as::<_, StickySection>(&format!(
        "INSERT INTO {} (title, description, image_url, sort_order, is_active) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}",
        variant.table()
    ))
    .bind(&fields.title)
    .bind(SqlJson(&fields.description))
    .bind(&fields.image_url)
    .bind(fields.sort_order)
    .bind(fields.is_active)
    .fetch_one(pool)
    .await
}

pub async fn update_section(
    pool: &PgPool,
    variant: StickyVariant,
    id: i32,
    fields: &StickyFields,
) -> Result<Option<StickySection>, sqlx::Error> {
    sqlx::query_as::<_, StickySection>(&format!(
        "UPDATE {} SET title = $1, description = $2, image_url = $3, \
         sort_order = $4, is_active = $5 WHERE id = $6 RETURNING {COLUMNS}",
        variant.table()
    ))
    .bind(&fields.title)
    .bind(SqlJson(&fields.description))
    .bind(&fields.image_url)
    .bind(fields.sort_order)
    .bind(fields.is_active)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_section(
    pool: &PgPool,
    variant: StickyVariant,
    id: i32,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", variant.table()))
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

async fn list(state: &AppState, variant: StickyVariant) -> Result<Json<Vec<StickySection>>, AppError> {
    let sections = fetch_sections(&state.db, variant).await?;
    Ok(Json(sections))
}

async fn create(
    state: &AppState,
    variant: StickyVariant,
    payload: StickyPayload,
) -> Result<(StatusCode, Json<StickySection>), AppError> {
    let fields = payload.into_fields()?;
    let section = insert_section(&state.db, variant, &fields).await?;
    tracing::info!(id = section.id, ?variant, "sticky section created");
    Ok((StatusCode::CREATED, Json(section)))
}

async fn update(
    state: &AppState,
    variant: StickyVariant,
    request: StickyUpdate,
) -> Result<Json<StickySection>, AppError> {
    let id = request
        .id
        .ok_or_else(|| AppError::validation("Missing required fields or ID"))?;
    let fields = request
        .fields
        .into_fields()
        .map_err(|_| AppError::validation("Missing required fields or ID"))?;
    let section = update_section(&state.db, variant, id, &fields)
        .await?
        .ok_or_else(|| AppError::not_found("Item not found"))?;
    Ok(Json(section))
}

async fn remove(
    state: &AppState,
    variant: StickyVariant,
    request: DeleteRequest,
) -> Result<Json<DeletedResponse>, AppError> {
    if !delete_section(&state.db, variant, request.id).await? {
        return Err(AppError::not_found("Item not found"));
    }
    tracing::info!(id = request.id, ?variant, "sticky section deleted");
    Ok(Json(DeletedResponse::item()))
}

/// `GET /api/sticky-scroll` - public active sections
pub async fn list_standard(
    State(state): State<AppState>,
) -> Result<Json<Vec<StickySection>>, AppError> {
    list(&state, StickyVariant::Standard).await
}

/// `POST /api/sticky-scroll` - create a section (token required)
pub async fn create_standard(
    State(state): State<AppState>,
    Json(payload): Json<StickyPayload>,
) -> Result<(StatusCode, Json<StickySection>), AppError> {
    create(&state, StickyVariant::Standard, payload).await
}

/// `PUT /api/sticky-scroll` - update a section (token required)
pub async fn update_standard(
    State(state): State<AppState>,
    Json(request): Json<StickyUpdate>,
) -> Result<Json<StickySection>, AppError> {
    update(&state, StickyVariant::Standard, request).await
}

/// `DELETE /api/sticky-scroll` - delete by body id (token required)
pub async fn remove_standard(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<DeletedResponse>, AppError> {
    remove(&state, StickyVariant::Standard, request).await
}

/// `GET /api/sticky-scroll-reversed` - public active sections
pub async fn list_reversed(
    State(state): State<AppState>,
) -> Result<Json<Vec<StickySection>>, AppError> {
    list(&state, StickyVariant::Reversed).await
}

/// `POST /api/sticky-scroll-reversed` - create a section (token required)
pub async fn create_reversed(
    State(state): State<AppState>,
    Json(payload): Json<StickyPayload>,
) -> Result<(StatusCode, Json<StickySection>), AppError> {
    create(&state, StickyVariant::Reversed, payload).await
}

/// `PUT /api/sticky-scroll-reversed` - update a section (token required)
pub async fn update_reversed(
    State(state): State<AppState>,
    Json(request): Json<StickyUpdate>,
) -> Result<Json<StickySection>, AppError> {
    update(&state, StickyVariant::Reversed, request).await
}

/// `DELETE /api/sticky-scroll-reversed` - delete by body id (token required)
pub async fn remove_reversed(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<DeletedResponse>, AppError> {
    remove(&state, StickyVariant::Reversed, request).await
}
