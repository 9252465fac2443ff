//! Music-catalog search port.

use async_trait::async_trait;

use crate::domain::TrackInfo;
use crate::error::Result;

/// One page of catalog search results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total hits on the catalog side, across all pages.
    pub total: u32,
    pub offset: u32,
}

impl<T> Page<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Search operations against the external music catalog.
#[async_trait]
pub trait MusicCatalog: Send + Sync {
    /// Search tracks by free-text query.
    async fn search(&self, query: &str, limit: u32, offset: u32) -> Result<Page<TrackInfo>>;
}
