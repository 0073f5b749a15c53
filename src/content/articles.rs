/**
 * Articles
 *
 * Row model, database operations and HTTP handlers for the blog articles
 * shown on the public site and edited from the admin panel.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::content::{DeleteRequest, DeletedResponse};
use crate::error::AppError;
use crate::server::state::AppState;

/// An article row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    /// Row id
    pub id: i32,
    /// Article title
    pub title: String,
    /// Short teaser shown in the list view
    pub excerpt: String,
    /// Cover image URL
    pub image: String,
    /// Author display name
    pub author: String,
    /// Reading-time label, e.g. "5 min"
    #[serde(rename = "readTime")]
    pub read_time: String,
    /// Full article body
    pub full_content: String,
}

/// Fields accepted when creating or updating an article
#[derive(Debug, Deserialize, Serialize)]
pub struct ArticlePayload {
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub author: String,
    #[serde(rename = "readTime")]
    pub read_time: String,
    pub full_content: String,
}

/// Update request: the row id plus the full replacement payload
#[derive(Debug, Deserialize)]
pub struct ArticleUpdate {
    pub id: i32,
    #[serde(flatten)]
    pub fields: ArticlePayload,
}

const COLUMNS: &str = "id, title, excerpt, image, author, read_time, full_content";

/// Load all articles ordered by id
pub async fn fetch_articles(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(&format!(
        "SELECT {COLUMNS} FROM articles ORDER BY id ASC"
    ))
    .fetch_all(pool)
    .await
}

/// Insert a new article, returning the created row
pub async fn insert_article(pool: &PgPool, payload: &ArticlePayload) -> Result<Article, sqlx::Error> {
    sqlx::query_as::<_, Article>(&format!(
        "INSERT INTO articles (title, excerpt, image, author, read_time, full_content) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
    ))
    .bind(&payload.title)
    .bind(&payload.excerpt)
    .bind(&payload.image)
    .bind(&payload.author)
    .bind(&payload.read_time)
    .bind(&payload.full_content)
    .fetch_one(pool)
    .await
}

/// Update an article in place, returning the row or `None` when missing
pub async fn update_article(
    pool: &PgPool,
    id: i32,
    payload: &ArticlePayload,
) -> Result<Option<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(&format!(
        "UPDATE articles SET title = $1, excerpt = $2, image = $3, author = $4, \
         read_time = $5, full_content = $6 WHERE id = $7 RETURNING {COLUMNS}"
    ))
    .bind(&payload.title)
    .bind(&payload.excerpt)
    .bind(&payload.image)
    .bind(&payload.author)
    .bind(&payload.read_time)
    .bind(&payload.full_content)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete an article; returns whether a row was removed
pub async fn delete_article(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM articles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// `GET /api/articles` - public article list
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Article>>, AppError> {
    let articles = fetch_articles(&state.db).await?;
    Ok(Json(articles))
}

/// `POST /api/articles` - create an article (token required)
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ArticlePayload>,
) -> Result<(StatusCode, Json<Article>), AppError> {
    let article = insert_article(&state.db, &payload).await?;
    tracing::info!(id = article.id, "article created");
    Ok((StatusCode::CREATED, Json(article)))
}

/// `PUT /api/articles` - update an article (token required)
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<ArticleUpdate>,
) -> Result<Json<Article>, AppError> {
    let article = update_article(&state.db, request.id, &request.fields)
        .await?
        .ok_or_else(|| AppError::not_found("Item not found"))?;
    Ok(Json(article))
}

/// `DELETE /api/articles` - delete by body id (token required)
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<DeletedResponse>, AppError> {
    if !delete_article(&state.db, request.id).await? {
        return Err(AppError::not_found("Item not found"));
    }
    tracing::info!(id = request.id, "article deleted");
    Ok(Json(DeletedResponse::item()))
}
