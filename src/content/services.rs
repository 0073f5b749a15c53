/**
 * Services
 *
 * Row model, database operations and HTTP handlers for the cleaning
 * service cards on the public site.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::content::{DeleteRequest, DeletedResponse};
use crate::error::AppError;
use crate::server::state::AppState;

/// A service row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Service {
    /// Row id
    pub id: i32,
    /// Service title
    pub title: String,
    /// Service description
    pub description: String,
    /// Icon identifier resolved by the front end
    pub icon_name: String,
    /// Accent color for the card
    pub color: String,
}

/// Fields accepted when creating or updating a service
#[derive(Debug, Deserialize, Serialize)]
pub struct ServicePayload {
    pub title: String,
    pub description: String,
    pub icon_name: String,
    pub color: String,
}

/// Update request: the row id plus the full replacement payload
#[derive(Debug, Deserialize)]
pub struct ServiceUpdate {
    pub id: i32,
    #[serde(flatten)]
    pub fields: ServicePayload,
}

const COLUMNS: &str = "id, title, description, icon_name, color";

pub async fn fetch_services(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(&format!(
        "SELECT {COLUMNS} FROM services ORDER BY id ASC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn insert_service(pool: &PgPool, payload: &ServicePayload) -> Result<Service, sqlx::Error> {
    sqlx::query_as::<_, Service>(&format!(
        "INSERT INTO services (title, description, icon_name, color) \
         VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
    ))
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(&payload.icon_name)
    .bind(&payload.color)
    .fetch_one(pool)
    .await
}

pub async fn update_service(
    pool: &PgPool,
    id: i32,
    payload: &ServicePayload,
) -> Result<Option<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(&format!(
        "UPDATE services SET title = $1, description = $2, icon_name = $3, color = $4 \
         WHERE id = $5 RETURNING {COLUMNS}"
    ))
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(&payload.icon_name)
    .bind(&payload.color)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_service(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM services WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// `GET /api/services` - public service list
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Service>>, AppError> {
    let services = fetch_services(&state.db).await?;
    Ok(Json(services))
}

/// `POST /api/services` - create a service (token required)
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ServicePayload>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    let service = insert_service(&state.db, &payload).await?;
    tracing::info!(id = service.id, "service created");
    Ok((StatusCode::CREATED, Json(service)))
}

/// `PUT /api/services` - update a service (token required)
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<ServiceUpdate>,
) -> Result<Json<Service>, AppError> {
    let service = update_service(&state.db, request.id, &request.fields)
        .await?
        .ok_or_else(|| AppError::not_found("Item not found"))?;
    Ok(Json(service))
}

/// `DELETE /api/services` - delete by body id (token required)
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<DeletedResponse>, AppError> {
    if !delete_service(&state.db, request.id).await? {
        return Err(AppError::not_found("Item not found"));
    }
    tracing::info!(id = request.id, "service deleted");
    Ok(Json(DeletedResponse::item()))
}
