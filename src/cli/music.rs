//! `paceline music` subcommands.

use clap::{Args, Subcommand};
use tabled::{Table, Tabled};

use super::context::AppContext;
use super::output;
use crate::domain::TrackId;
use crate::error::{CatalogError, Result};

#[derive(Subcommand, Debug)]
pub enum MusicCommand {
    /// Search the music catalog
    Search(SearchArgs),
    /// List the saved running playlist
    List,
    /// Search and save one hit to the playlist
    Add(AddArgs),
    /// Remove a saved track
    Remove {
        /// Saved track id
        id: TrackId,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,
    /// Result page offset
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Free-text query
    pub query: String,
    /// Index of the search hit to save (as shown by `music search`)
    #[arg(long, default_value_t = 0)]
    pub pick: u32,
}

#[derive(Tabled)]
struct HitRow {
    #[tabled(rename = "#")]
    index: u32,
    title: String,
    artist: String,
}

#[derive(Tabled)]
struct TrackRow {
    id: String,
    title: String,
    artist: String,
    added: String,
}

pub async fn run(command: MusicCommand, ctx: &AppContext) -> Result<()> {
    let playlist = ctx.playlist()?;
    let limit = ctx.config.catalog.page_limit;
    match command {
        MusicCommand::Search(args) => {
            let page = playlist.search(&args.query, limit, args.offset).await?;
            if page.is_empty() {
                output::note("no matches");
                return Ok(());
            }
            let rows: Vec<HitRow> = page
                .items
                .iter()
                .enumerate()
                .map(|(i, t)| HitRow {
                    index: args.offset + i as u32,
                    title: t.title.clone(),
                    artist: t.artist.clone(),
                })
                .collect();
            output::note(&Table::new(rows).to_string());
            output::note(&format!("{} of {} hits", page.items.len(), page.total));
        }
        MusicCommand::List => {
            let cache = playlist.cache();
            cache.refresh().await?;
            let rows: Vec<TrackRow> = cache
                .entities()
                .into_iter()
                .map(|t| TrackRow {
                    id: t.id.to_string(),
                    title: t.title,
                    artist: t.artist,
                    added: t.created_at.format("%Y-%m-%d").to_string(),
                })
                .collect();
            if rows.is_empty() {
                output::note("playlist is empty");
            } else {
                output::note(&Table::new(rows).to_string());
            }
        }
        MusicCommand::Add(args) => {
            let page = playlist.search(&args.query, limit, 0).await?;
            let info = page
                .items
                .into_iter()
                .nth(args.pick as usize)
                .ok_or_else(|| CatalogError::Rejected {
                    status: 404,
                    message: format!("no search hit at index {}", args.pick),
                })?;
            let track = playlist.save(info).await?;
            output::ok(&format!("added {} by {}", track.title, track.artist));
        }
        MusicCommand::Remove { id } => {
            playlist.cache().refresh().await?;
            playlist.remove(&id).await?;
            output::ok("track removed");
        }
    }
    Ok(())
}
