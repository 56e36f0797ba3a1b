//! `hwsd` command line tool.
//!
//! Creates the HWSD STAC collection and items, converts NetCDF sources to
//! COGs and validates written records.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use hwsd::HwsdConfig;
use hwsd_cli::{commands, Cli, Commands, LogFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format)?;

    let config = HwsdConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::CreateCollection { destination } => {
            let path = commands::create_collection(&destination)?;
            info!(path = ?path, "Wrote collection");
        }
        Commands::CreateItem { source, destination } => {
            let item = commands::create_item(&source, &destination).await?;
            info!(id = %item.id, path = ?destination, "Wrote item");
        }
        Commands::PopulateCollection { source, destination } => {
            let written = commands::populate_collection(&source, &destination).await?;
            info!(files = written.len(), "Wrote populated collection");
        }
        Commands::CreateCog { source, destination } => {
            let output = commands::create_cog(&source, &destination, &config.converter)?;
            info!(output = ?output, "Wrote COG");
        }
        Commands::CreateCogs { source, destination } => {
            commands::create_cogs(&source, &destination, &config.converter)?;
        }
        Commands::Validate { paths } => {
            let checked = commands::validate(&paths)?;
            info!(files = checked, "All records passed validation");
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str, format: LogFormat) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => {
            tracing::subscriber::set_global_default(builder.with_thread_ids(true).json().finish())?
        }
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.pretty().finish())?,
    }

    Ok(())
}
