use clap::Parser;

use paceline::cli::{self, Cli};
use paceline::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    if let Err(e) = cli::run(cli, config).await {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
