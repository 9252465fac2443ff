//! Command-line interface definitions.

pub mod auth;
pub mod check;
pub mod context;
pub mod course;
pub mod music;
pub mod output;
pub mod record;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use context::AppContext;

/// Paceline - running courses, records, and the playlist that keeps pace.
#[derive(Parser, Debug)]
#[command(name = "paceline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "paceline.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the signed-in session
    #[command(subcommand)]
    Auth(auth::AuthCommand),

    /// Manage running courses
    #[command(subcommand)]
    Course(course::CourseCommand),

    /// Manage running records
    #[command(subcommand)]
    Record(record::RecordCommand),

    /// Search the catalog and curate the running playlist
    #[command(subcommand)]
    Music(music::MusicCommand),

    /// Inspect configuration
    #[command(subcommand)]
    Config(check::ConfigCommand),
}

/// Dispatch a parsed invocation.
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Config(command) => check::run(command, &cli.config),
        Commands::Auth(command) => {
            let ctx = AppContext::new(config)?;
            auth::run(command, &ctx).await
        }
        Commands::Course(command) => {
            let ctx = AppContext::new(config)?;
            course::run(command, &ctx).await
        }
        Commands::Record(command) => {
            let ctx = AppContext::new(config)?;
            record::run(command, &ctx).await
        }
        Commands::Music(command) => {
            let ctx = AppContext::new(config)?;
            music::run(command, &ctx).await
        }
    }
}
