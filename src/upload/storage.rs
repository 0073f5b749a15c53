/**
 * Blob Store Client
 *
 * Thin client for the external object store behind the upload relay.
 * Objects are written with a public-read policy under the configured base
 * URL; the object URL doubles as the public URL returned to the client.
 */

use axum::http::header::CONTENT_TYPE;

use crate::error::AppError;

/// External object-store client
#[derive(Clone)]
pub struct BlobStore {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl BlobStore {
    /// Build a client for the store at `base_url`, authenticated by `token`
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Upload `bytes` under `key` with public-read access
    ///
    /// Returns the public URL on success. Either the object lands and the
    /// URL is returned, or nothing is persisted; there is no partial state
    /// to reconcile.
    pub async fn put(
        &self,
        key: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let url = format!("{}/{}", self.base_url, key);

        let mut request = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .header("x-amz-acl", "public-read");
        if let Some(content_type) = content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }

        let response = request
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::storage(format!("upload request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::storage(format!(
                "store rejected upload with status {status}"
            )));
        }

        tracing::info!(%url, "file uploaded to blob store");
        Ok(url)
    }
}
