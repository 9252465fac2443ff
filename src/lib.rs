//! Paceline - client for a running-tracking backend.
//!
//! Users keep named running courses (routes with map geometry), log records
//! against them, and curate a running-music playlist synced against an
//! external music catalog. Persistence, auth, and file storage live in a
//! backend-as-a-service; this crate is the client side of that contract.
//!
//! # Architecture
//!
//! The centerpiece is the optimistic entity cache: an in-memory, sorted
//! list per entity type that applies updates and deletes locally before the
//! remote row store confirms them, then reconciles (server row on success,
//! pre-mutation snapshot on failure). One generic implementation serves
//! courses, records, and playlist tracks.
//!
//! # Modules
//!
//! - [`domain`] - Entities, route geometry, pace math, and the sort strategy
//! - [`port`] - Trait seams for the remote collaborators
//! - [`adapter`] - HTTP implementations: row store, auth, storage, catalog
//! - [`application`] - The optimistic cache and flows composed on it
//! - [`config`] - TOML configuration with env overrides
//! - [`error`] - Error types for the crate
//! - [`cli`] - The `paceline` command-line surface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use paceline::adapter::outbound::{BackendClient, RestGateway};
//! use paceline::application::CourseCache;
//! use paceline::domain::NewCourse;
//!
//! # async fn demo() -> paceline::error::Result<()> {
//! let client = Arc::new(BackendClient::new("https://proj.backend.example/", "anon-key")?);
//! let cache = CourseCache::new(Arc::new(RestGateway::new(client, "courses")));
//!
//! cache.refresh().await?;
//! cache.create(NewCourse::try_new("Han River Loop")?).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
