//! mesoticker CLI
//!
//! Long-running entry point for the hourly scrape-and-publish loop, plus
//! one-shot operational commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use mesoticker::{
    error::Result, models::Config, pipeline, services::TickerScraper, storage::FeedStore,
    utils::today_central,
};

/// mesoticker - Mesonet Ticker Atom feed generator
#[derive(Parser, Debug)]
#[command(
    name = "mesoticker",
    version,
    about = "Republishes the Oklahoma Mesonet Ticker as an Atom feed"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "ticker.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the hourly scrape-and-publish loop until stopped
    Run,

    /// Run a single cycle and exit
    Once,

    /// Validate the configuration file
    Validate,

    /// Show current artifact status
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("mesoticker starting...");

    // `validate` must surface an unreadable or malformed file instead of
    // silently checking the defaults.
    let mut config = match cli.command {
        Command::Validate => Config::load(&cli.config)?,
        _ => Config::load_or_default(&cli.config),
    };
    config.apply_env()?;
    config.validate()?;

    let config = Arc::new(config);
    let store = FeedStore::new(config.output.artifact_path());

    match cli.command {
        Command::Run => {
            log::info!(
                "Publishing {} to {} every {}s",
                config.ticker.base_url,
                store.path().display(),
                config.ticker.cycle_interval_secs
            );
            let scraper = TickerScraper::new(Arc::clone(&config))?;
            pipeline::run_loop(Arc::clone(&config), &scraper, &store).await?;
        }

        Command::Once => {
            let scraper = TickerScraper::new(Arc::clone(&config))?;
            let stats = pipeline::run_cycle(&config, &scraper, &store, today_central()).await?;
            log::info!(
                "Cycle complete: {} pages, {} fetch failures, {} extract failures, {} entries kept",
                stats.page_total,
                stats.fetch_failures,
                stats.extract_failures,
                stats.entries_kept
            );
            if !stats.artifact_written {
                log::warn!("Artifact was not updated this cycle");
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            log::info!(
                "Config OK (window {} days, artifact {})",
                config.ticker.window_days,
                store.path().display()
            );
        }

        Command::Info => {
            let status = store.status().await?;
            log::info!("Artifact path: {}", status.path.display());
            log::info!("Configured window: {} days", config.ticker.window_days);
            if status.exists {
                log::info!("Artifact size: {} bytes", status.size);
                match status.modified {
                    Some(modified) => log::info!("Last written: {}", modified),
                    None => log::info!("Last written: unknown"),
                }
            } else {
                log::info!("No artifact written yet.");
            }
        }
    }

    Ok(())
}
