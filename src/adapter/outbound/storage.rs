//! Object-storage adapter for the backend's bucket API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use super::rest::BackendClient;
use crate::error::{Result, StoreError};
use crate::port::outbound::storage::ObjectStorage;

/// Path-addressed object storage within one bucket.
pub struct RestStorage {
    client: Arc<BackendClient>,
    bucket: String,
}

impl RestStorage {
    pub fn new(client: Arc<BackendClient>, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    fn object_path(&self, path: &str) -> String {
        format!("storage/v1/object/{}/{}", self.bucket, path)
    }

    async fn expect_success(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}

#[async_trait]
impl ObjectStorage for RestStorage {
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        let url = self.client.endpoint(&self.object_path(path))?;
        debug!(bucket = %self.bucket, path, size = bytes.len(), "uploading object");

        let response = self
            .client
            .request(Method::POST, url)
            .header("Content-Type", content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    fn public_url(&self, path: &str) -> String {
        // Public objects are served under a fixed prefix; no round trip.
        self.client
            .endpoint(&format!("storage/v1/object/public/{}/{}", self.bucket, path))
            .map(|u| u.to_string())
            .unwrap_or_default()
    }

    async fn remove(&self, path: &str) -> Result<()> {
        let url = self.client.endpoint(&self.object_path(path))?;
        debug!(bucket = %self.bucket, path, "removing object");

        let response = self.client.request(Method::DELETE, url).send().await?;
        Self::expect_success(response).await
    }
}
