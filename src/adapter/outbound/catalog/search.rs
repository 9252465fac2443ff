//! Music-catalog search adapter.
//!
//! Maps the provider's paginated track response onto the simplified
//! [`TrackInfo`] shape the rest of the app works with.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::token::TokenSource;
use crate::config::CatalogConfig;
use crate::domain::TrackInfo;
use crate::error::{CatalogError, Result};
use crate::port::outbound::catalog::{MusicCatalog, Page};

/// Catalog search client with bearer-token auth.
pub struct CatalogClient {
    http: Client,
    search_url: Url,
    tokens: TokenSource,
}

impl CatalogClient {
    pub fn new(search_url: &str, tokens: TokenSource) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            search_url: Url::parse(search_url)?,
            tokens,
        })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let tokens = TokenSource::new(
            &config.token_url,
            config.client_id.clone(),
            config.client_secret.clone(),
        )?;
        Self::new(&config.search_url, tokens)
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    tracks: TrackPage,
}

#[derive(Deserialize)]
struct TrackPage {
    items: Vec<RawTrack>,
    total: u32,
}

#[derive(Deserialize)]
struct RawTrack {
    id: String,
    name: String,
    #[serde(default)]
    preview_url: Option<String>,
    #[serde(default)]
    external_urls: ExternalUrls,
    album: Album,
    artists: Vec<Artist>,
}

#[derive(Deserialize, Default)]
struct ExternalUrls {
    #[serde(default)]
    spotify: Option<String>,
}

#[derive(Deserialize)]
struct Album {
    #[serde(default)]
    images: Vec<Image>,
}

#[derive(Deserialize)]
struct Image {
    url: String,
}

#[derive(Deserialize)]
struct Artist {
    name: String,
}

impl RawTrack {
    fn into_info(self) -> TrackInfo {
        let artist = self
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        TrackInfo {
            id: self.id,
            title: self.name,
            artist,
            album_image: self.album.images.into_iter().next().map(|i| i.url),
            preview_url: self.preview_url,
            external_url: self.external_urls.spotify,
        }
    }
}

#[async_trait::async_trait]
impl MusicCatalog for CatalogClient {
    async fn search(&self, query: &str, limit: u32, offset: u32) -> Result<Page<TrackInfo>> {
        let bearer = self.tokens.bearer().await?;

        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("type", "track")
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());

        debug!(query, limit, offset, "searching catalog");
        let response = self.http.get(url).bearer_auth(bearer).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body: SearchResponse = response.json().await?;
        Ok(Page {
            items: body.tracks.items.into_iter().map(RawTrack::into_info).collect(),
            total: body.tracks.total,
            offset,
        })
    }
}
