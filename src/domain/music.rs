//! Running-music playlist entries, synced against the music catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;
use crate::domain::id::TrackId;
use crate::domain::sort::Sortable;

/// The simplified track shape produced by a catalog search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    /// Catalog-side track identifier.
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album_image: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
}

/// A saved playlist entry as stored remotely.
///
/// `catalog_id` is the catalog's track id; `id` is the row id assigned by
/// the row store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningTrack {
    pub id: TrackId,
    pub created_at: DateTime<Utc>,
    pub catalog_id: String,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album_image: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
}

impl Sortable for RunningTrack {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }

    fn sort_name(&self) -> Option<&str> {
        Some(&self.title)
    }
}

/// Draft for saving a catalog search hit to the playlist.
#[derive(Debug, Clone, Serialize)]
pub struct NewTrack {
    catalog_id: String,
    title: String,
    artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    album_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_url: Option<String>,
}

impl NewTrack {
    /// Build a draft from a catalog hit. Rejects tracks with a blank title,
    /// which would render as an empty playlist row.
    pub fn try_from_info(info: TrackInfo) -> Result<Self, ValidationError> {
        if info.title.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            catalog_id: info.id,
            title: info.title,
            artist: info.artist,
            album_image: info.album_image,
            preview_url: info.preview_url,
            external_url: info.external_url,
        })
    }

    #[must_use]
    pub fn catalog_id(&self) -> &str {
        &self.catalog_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }
}

/// Field-wise patch for a playlist entry. Only the display title is
/// editable; catalog fields are owned by the catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrackPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TrackPatch {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
