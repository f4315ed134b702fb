//! Asset-Mapper main entry point
//!
//! This is the command-line interface for the Asset-Mapper site crawler.

use anyhow::Context;
use asset_mapper::config::{load_config_or_default, Config};
use asset_mapper::crawler::run_crawl;
use asset_mapper::output::{log_statistics, write_report, CrawlStatistics};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Asset-Mapper: a single-domain site and asset mapper
///
/// Asset-Mapper crawls every page reachable from the seed URL within the
/// seed's domain and prints, as JSON, the scripts, stylesheets, images and
/// icons each page references.
#[derive(Parser, Debug)]
#[command(name = "asset-mapper")]
#[command(version)]
#[command(about = "A single-domain site and asset mapper", long_about = None)]
struct Cli {
    /// Seed URL (scheme and trailing slash are optional)
    #[arg(value_name = "URL")]
    seed: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the JSON report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Stop after this many pages (0 = unlimited)
    #[arg(long, value_name = "N")]
    max_pages: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(seed) = require_seed(cli.seed.as_deref(), &mut std::io::stdout())? else {
        return Ok(());
    };

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_config_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            cli.config
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;
    apply_overrides(&mut config, &cli);

    let report = run_crawl(&config, seed)
        .await
        .with_context(|| format!("Failed to start crawl of {}", seed))?;

    log_statistics(&CrawlStatistics::from_report(&report));

    let output_path = (!config.output.path.is_empty()).then(|| PathBuf::from(&config.output.path));
    write_report(&report, output_path.as_deref()).context("Failed to write report")?;

    Ok(())
}

/// Returns the seed, or tells the user there is none
///
/// A missing seed is not an error: the notice goes to `out` and the
/// process exits successfully without crawling.
fn require_seed<'a>(
    seed: Option<&'a str>,
    out: &mut impl Write,
) -> std::io::Result<Option<&'a str>> {
    if seed.is_none() {
        writeln!(out, "No URL specified")?;
    }
    Ok(seed)
}

/// Applies command-line overrides on top of the file configuration
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(output) = &cli.output {
        config.output.path = output.display().to_string();
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("asset_mapper=info,warn"),
            1 => EnvFilter::new("asset_mapper=debug,info"),
            2 => EnvFilter::new("asset_mapper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
