//! Object-storage port for course and profile images.

use async_trait::async_trait;

use crate::error::Result;

/// Object storage operations, path-addressed within a single bucket.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload a blob to the given path, replacing any existing object.
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;

    /// The publicly servable URL for a stored object. No round trip.
    fn public_url(&self, path: &str) -> String;

    /// Remove the object at the given path.
    async fn remove(&self, path: &str) -> Result<()>;
}
