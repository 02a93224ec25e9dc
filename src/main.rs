//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `steam_products` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Ctrl-C handling
//! - Writing the JSON Lines output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;

use steam_products::export::{open_output, write_jsonl};
use steam_products::initialization::init_logger_with;
use steam_products::{discover_urls, read_urls, run_scrape, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // SCRAPE_INTERVAL and SCRAPE_OFFSET may come from a .env file next to the
    // working directory or the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run(config).await {
        eprintln!("steam_products error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupted, finishing with the products scraped so far");
            ctrl_c_cancel.cancel();
        }
    });

    let urls = match (&config.file, config.search_pages) {
        (Some(file), _) => read_urls(file).await?,
        (None, Some(pages)) => discover_urls(&config, pages).await?,
        (None, None) => anyhow::bail!("either an input file or --search-pages is required"),
    };

    let output = config.output.clone();
    let report = run_scrape(config, urls, cancel).await?;

    let writer = open_output(output.as_deref())?;
    let written = write_jsonl(&report.products, writer).context("Failed to write products")?;

    if let Some(path) = output {
        eprintln!(
            "✅ Scraped {} of {} URL{} in {:.1}s{} - results saved in {}",
            written,
            report.total_urls,
            if report.total_urls == 1 { "" } else { "s" },
            report.elapsed_seconds,
            if report.cancelled { " (interrupted)" } else { "" },
            path.display()
        );
    }
    Ok(())
}
