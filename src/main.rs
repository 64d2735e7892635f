//! Shadow Fleet Scraper main entry point
//!
//! This is the command-line interface for the sanctioned-vessel registry scraper.

use anyhow::Context;
use clap::Parser;
use shadow_fleet_scraper::config::{load_config_with_hash, Config};
use shadow_fleet_scraper::crawler::{Coordinator, HttpFetcher, RunOptions};
use shadow_fleet_scraper::output::print_report;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shadow Fleet Scraper: a resumable registry scraper
///
/// Enumerates every vessel on the shadow-fleet registry, scrapes each detail
/// page, and keeps the results in a JSON checkpoint. Re-running resumes where
/// the previous run stopped.
#[derive(Parser, Debug)]
#[command(name = "shadow-fleet-scraper")]
#[command(version = "1.0.0")]
#[command(about = "A resumable scraper for the shadow-fleet vessel registry", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Ignore the existing checkpoint and scrape every vessel
    #[arg(long, conflicts_with_all = ["vessel", "list_only"])]
    fresh: bool,

    /// Show how many vessels would be scraped without fetching detail pages
    #[arg(long, conflicts_with_all = ["vessel", "list_only"])]
    dry_run: bool,

    /// Scrape a single detail page and print its record as JSON
    #[arg(long, value_name = "URL", conflicts_with = "list_only")]
    vessel: Option<String>,

    /// Enumerate the listing, write it to the listing file, and exit
    #[arg(long)]
    list_only: bool,

    /// Use the saved listing file instead of enumerating
    #[arg(long, conflicts_with_all = ["vessel", "list_only"])]
    from_listing: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load(cli.config.as_deref())?;

    let fetcher = HttpFetcher::new(&config.http).context("Failed to build HTTP client")?;
    let coordinator = Coordinator::with_fetcher(config, fetcher)?;

    // Handle different modes
    if let Some(url) = &cli.vessel {
        handle_vessel(&coordinator, url).await?;
    } else if cli.list_only {
        handle_list_only(&coordinator).await?;
    } else {
        let options = RunOptions {
            fresh: cli.fresh,
            from_listing: cli.from_listing,
            dry_run: cli.dry_run,
        };
        handle_scrape(&coordinator, &options).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shadow_fleet_scraper=info,warn"),
            1 => EnvFilter::new("shadow_fleet_scraper=debug,info"),
            2 => EnvFilter::new("shadow_fleet_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads and validates the configuration, or falls back to the defaults
fn load(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using built-in defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Handles the --vessel mode: scrapes one page and prints the record
async fn handle_vessel(
    coordinator: &Coordinator<HttpFetcher>,
    url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Scraping single vessel: {}", url);

    let record = coordinator.scrape_one(url).await?;
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}

/// Handles the --list-only mode: writes the enumerated listing
async fn handle_list_only(
    coordinator: &Coordinator<HttpFetcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let listings = coordinator.export_listing().await?;
    println!("✓ Listed {} vessels", listings.len());

    Ok(())
}

/// Handles the main scrape operation
async fn handle_scrape(
    coordinator: &Coordinator<HttpFetcher>,
    options: &RunOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if options.fresh {
        tracing::info!("Starting fresh scrape (ignoring checkpoint)");
    } else {
        tracing::info!("Starting scrape (will resume from checkpoint if present)");
    }

    match coordinator.run(options).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}
