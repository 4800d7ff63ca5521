//! Renamer CLI
//!
//! A command-line tool for normalizing TV episode and movie filenames.

use clap::Parser;
use renamer::cli::{
    args::{Cli, Commands, LogLevel},
    commands::rename,
};
use renamer::models::{config, media::MediaType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.loglevel);

    // Command line flags switch on what the config file leaves off
    let mut config = config::load_config();
    config.rename.no_confirm |= cli.no_confirm;
    config.rename.simple |= cli.simple;
    config.rename.recursive |= cli.recursive;
    config.rename.offline |= cli.offline;

    let (paths, media_type) = match cli.command {
        Commands::Episodes { paths } => (paths, MediaType::Episodes),
        Commands::Movies { paths } => (paths, MediaType::Movies),
    };

    let summary = rename::rename(&paths, media_type, config).await?;
    if summary.failed > 0 {
        anyhow::bail!("{} files could not be renamed", summary.failed);
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(level: LogLevel) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(EnvFilter::new(level.as_directive()))
        .init();
}
