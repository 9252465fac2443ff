//! Shared command context: config, backend client, session, caches.

use std::sync::Arc;

use crate::adapter::outbound::{BackendClient, CatalogClient, RestAuth, RestGateway, RestStorage};
use crate::application::{CourseCache, MusicCache, PlaylistService, RecordCache, SessionStore};
use crate::config::Config;
use crate::domain::{Course, RunningRecord, RunningTrack};
use crate::error::Result;
use crate::port::outbound::store::EntityGateway;

/// Everything a command needs, built once per invocation.
///
/// The caches are handed out as explicit `Arc` references; nothing looks
/// them up ambiently.
pub struct AppContext {
    pub config: Config,
    pub client: Arc<BackendClient>,
    pub sessions: SessionStore,
}

impl AppContext {
    /// Build the context and attach the stored session token, if any.
    pub fn new(config: Config) -> Result<Self> {
        let client = Arc::new(BackendClient::from_config(&config.backend)?);
        let sessions = SessionStore::new()?;
        if let Some(session) = sessions.load()? {
            client.set_access_token(Some(session.access_token));
        }
        Ok(Self {
            config,
            client,
            sessions,
        })
    }

    pub fn auth(&self) -> RestAuth {
        RestAuth::new(self.client.clone())
    }

    pub fn storage(&self) -> RestStorage {
        RestStorage::new(self.client.clone(), self.config.backend.image_bucket.clone())
    }

    pub fn course_cache(&self) -> Arc<CourseCache> {
        let gateway: Arc<dyn EntityGateway<Course>> = Arc::new(RestGateway::new(
            self.client.clone(),
            self.config.backend.courses_table.clone(),
        ));
        Arc::new(CourseCache::new(gateway))
    }

    pub fn record_cache(&self) -> Arc<RecordCache> {
        let gateway: Arc<dyn EntityGateway<RunningRecord>> = Arc::new(RestGateway::new(
            self.client.clone(),
            self.config.backend.records_table.clone(),
        ));
        Arc::new(RecordCache::new(gateway))
    }

    pub fn music_cache(&self) -> Arc<MusicCache> {
        let gateway: Arc<dyn EntityGateway<RunningTrack>> = Arc::new(RestGateway::new(
            self.client.clone(),
            self.config.backend.music_table.clone(),
        ));
        Arc::new(MusicCache::new(gateway))
    }

    pub fn playlist(&self) -> Result<PlaylistService> {
        let catalog = Arc::new(CatalogClient::from_config(&self.config.catalog)?);
        Ok(PlaylistService::new(catalog, self.music_cache()))
    }
}
