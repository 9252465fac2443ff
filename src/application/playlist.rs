//! Running-music playlist flow: search the catalog, save picks.

use std::sync::Arc;

use tracing::debug;

use super::cache::MusicCache;
use crate::domain::{NewTrack, RunningTrack, TrackId, TrackInfo};
use crate::error::Result;
use crate::port::outbound::catalog::{MusicCatalog, Page};

/// Curates the playlist: catalog searches on one side, the playlist cache
/// on the other.
pub struct PlaylistService {
    catalog: Arc<dyn MusicCatalog>,
    cache: Arc<MusicCache>,
}

impl PlaylistService {
    pub fn new(catalog: Arc<dyn MusicCatalog>, cache: Arc<MusicCache>) -> Self {
        Self { catalog, cache }
    }

    /// Search the catalog for candidate tracks.
    pub async fn search(&self, query: &str, limit: u32, offset: u32) -> Result<Page<TrackInfo>> {
        self.catalog.search(query, limit, offset).await
    }

    /// Save a catalog hit to the playlist.
    pub async fn save(&self, info: TrackInfo) -> Result<RunningTrack> {
        debug!(catalog_id = %info.id, title = %info.title, "saving track to playlist");
        let draft = NewTrack::try_from_info(info)?;
        self.cache.create(draft).await
    }

    /// Remove a saved track from the playlist.
    pub async fn remove(&self, id: &TrackId) -> Result<()> {
        self.cache.remove(id).await
    }

    /// The playlist cache, for list views.
    #[must_use]
    pub fn cache(&self) -> &Arc<MusicCache> {
        &self.cache
    }
}
