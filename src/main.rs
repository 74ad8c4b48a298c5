//! Crawl-Bench main entry point
//!
//! Command-line interface wiring configuration, URL loading, the crawl run,
//! summary printing, and report persistence together.

use anyhow::Result;
use clap::Parser;
use crawl_bench::config::{load_config, resolve_concurrency, validate, CrawlConfig};
use crawl_bench::crawler::crawl;
use crawl_bench::input::load_urls;
use crawl_bench::report::{print_summary, write_report};
use crawl_bench::BenchError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Crawl-Bench: a bounded-concurrency URL fetch benchmark
///
/// Fetches every URL in a newline-delimited list with a cap on in-flight
/// requests, classifies each response, and writes a JSON report directly
/// comparable with the companion crawler implementations.
#[derive(Parser, Debug)]
#[command(name = "crawl-bench")]
#[command(version)]
#[command(about = "Fetch a URL list concurrently and report per-URL results", long_about = None)]
struct Cli {
    /// Path to the newline-delimited URL list
    #[arg(long, value_name = "FILE")]
    urls: Option<PathBuf>,

    /// Path for the JSON report
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum concurrent in-flight fetches; invalid values fall back to 10
    #[arg(short, long, value_name = "N")]
    concurrency: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => CrawlConfig::default(),
    };
    apply_cli_overrides(&mut config, &cli);
    validate(&config)?;

    let urls_path = PathBuf::from(&config.input.urls_path);
    let urls = match load_urls(&urls_path) {
        Ok(urls) => urls,
        Err(e @ BenchError::InputMissing { .. }) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    println!("Loaded {} URLs", urls.len());
    println!(
        "Starting crawl with max concurrency: {}",
        config.crawler.max_concurrent_fetches
    );

    let report = crawl(&config, urls).await?;

    print_summary(&report.summary);

    let report_path = PathBuf::from(&config.output.report_path);
    write_report(&report, &report_path)?;
    println!("Results saved to {}", report_path.display());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crawl_bench=info,warn"),
            1 => EnvFilter::new("crawl_bench=debug,info"),
            2 => EnvFilter::new("crawl_bench=trace,debug"),
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

/// Applies CLI flags on top of the loaded (or default) configuration
fn apply_cli_overrides(config: &mut CrawlConfig, cli: &Cli) {
    if let Some(raw) = cli.concurrency.as_deref() {
        config.crawler.max_concurrent_fetches = resolve_concurrency(raw);
    }
    if let Some(secs) = cli.timeout {
        config.crawler.request_timeout_secs = secs;
        // Keep the client ceiling above the per-request deadline when the
        // override pushes past the default.
        if config.crawler.client_timeout_secs < secs {
            config.crawler.client_timeout_secs = secs + 5;
        }
    }
    if let Some(path) = &cli.urls {
        config.input.urls_path = path.display().to_string();
    }
    if let Some(path) = &cli.output {
        config.output.report_path = path.display().to_string();
    }
}
