//! `paceline config` subcommands.

use std::path::Path;

use clap::Subcommand;

use super::output;
use crate::config::Config;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate the configuration file
    Validate,
}

pub fn run(command: ConfigCommand, path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Validate => {
            let config = Config::load(path)?;
            output::ok("config is valid");
            output::key_value("backend", &config.backend.url);
            output::key_value("courses", &config.backend.courses_table);
            output::key_value("records", &config.backend.records_table);
            output::key_value("music", &config.backend.music_table);
            output::key_value("catalog", &config.catalog.search_url);
        }
    }
    Ok(())
}
