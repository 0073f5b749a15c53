/**
 * Upload Relay Handler
 *
 * POST /api/upload accepts one multipart `file` field, forwards the bytes
 * to the external blob store and returns the resulting public URL. The
 * route sits behind the admin token gate.
 */

use axum::extract::{Multipart, State};
use axum::response::Json;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::server::state::AppState;

/// Upload response carrying the public URL
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL of the stored object
    pub url: String,
}

/// `POST /api/upload` - relay one file to the blob store (token required)
///
/// # Errors
///
/// * `400 Bad Request` - no `file` field, or an empty file
/// * `500 Internal Server Error` - the storage provider rejected the write
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("file").to_string();
            let content_type = field.content_type().map(|value| value.to_string());
            let bytes = field.bytes().await?;
            file = Some((file_name, content_type, bytes));
            break;
        }
    }

    let (file_name, content_type, bytes) =
        file.ok_or_else(|| AppError::validation("No file uploaded."))?;
    if bytes.is_empty() {
        return Err(AppError::validation("No file uploaded."));
    }

    let key = storage_key(&file_name);
    let url = state
        .blob
        .put(&key, content_type.as_deref(), bytes.to_vec())
        .await?;

    Ok(Json(UploadResponse { url }))
}

/// Derive a collision-resistant storage key for an uploaded file
///
/// Combines the upload timestamp, a random suffix and the original
/// filename with whitespace runs collapsed to dashes.
pub fn storage_key(original_name: &str) -> String {
    let sanitized = original_name.split_whitespace().collect::<Vec<_>>().join("-");
    let suffix = Uuid::new_v4().simple().to_string();

    format!(
        "uploads/{}-{}-{}",
        Utc::now().timestamp_millis(),
        &suffix[..8],
        sanitized
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_collapses_whitespace() {
        let key = storage_key("my photo  final.jpg");
        assert!(key.ends_with("-my-photo-final.jpg"));
    }

    #[test]
    fn test_storage_key_is_prefixed() {
        assert!(storage_key("a.png").starts_with("uploads/"));
    }

    #[test]
    fn test_storage_keys_do_not_collide() {
        let a = storage_key("a.png");
        let b = storage_key("a.png");
        assert_ne!(a, b);
    }
}
