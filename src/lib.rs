//! steam_products library: Steam store product page scraping
//!
//! This library fetches Steam store product pages politely and turns each one
//! into a normalized [`Product`] record. Every field is extracted on its own;
//! a missing field falls back to a default instead of dropping the product.
//!
//! # Example
//!
//! ```no_run
//! use steam_products::{run_scrape, Config};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     interval_secs: 2,
//!     offset_secs: 6,
//!     ..Default::default()
//! };
//! let urls = vec!["https://store.steampowered.com/app/812140/Assassins_Creed_Odyssey/".to_string()];
//!
//! let report = run_scrape(config, urls, CancellationToken::new()).await?;
//! println!("Scraped {} of {} URLs", report.products.len(), report.total_urls);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod crawl;
mod error_handling;
pub mod export;
pub mod extract;
pub mod initialization;
pub mod listing;
mod models;
pub mod normalize;
pub mod record;
mod utils;

// Re-export public API
pub use app::read_urls;
pub use config::{Config, LogFormat, LogLevel};
pub use crawl::{CrawlBatch, CrawlOrchestrator, SkippedUrl};
pub use error_handling::{
    ExtractionError, FieldKind, InitializationError, ProcessingStats, ScrapeError, SkipReason,
};
pub use models::Product;
pub use normalize::{parse_price, DateFormatSpec, DateNormalizer};
pub use record::RecordAssembler;
pub use run::{discover_urls, run_scrape, ScrapeReport};

// Internal run module (wires resources together for one scrape)
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{log_progress, print_error_statistics, print_summary, shutdown_gracefully};
    use crate::config::{Config, LOGGING_INTERVAL, SEARCH_URL_TEMPLATE};
    use crate::crawl::{CrawlOrchestrator, SkippedUrl};
    use crate::error_handling::ProcessingStats;
    use crate::initialization::{init_client, init_rate_limiter};
    use crate::listing::discover_product_urls;
    use crate::models::Product;

    /// Results of a scrape run.
    #[derive(Debug, Clone)]
    pub struct ScrapeReport {
        /// Number of URLs handed to the run
        pub total_urls: usize,
        /// Assembled products (input order with a single worker)
        pub products: Vec<Product>,
        /// URLs that were dropped, with the reason
        pub skipped: Vec<SkippedUrl>,
        /// True when the run was interrupted and `products` is partial
        pub cancelled: bool,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Scrapes `urls` with the provided configuration.
    ///
    /// This is the main entry point for the library. It builds the HTTP client,
    /// the politeness limiter and the record assembler from `config`, crawls the
    /// batch while logging progress, and prints skip and field statistics at
    /// the end.
    ///
    /// Cancelling `cancel` stops the crawl between URLs; the report then holds
    /// the products gathered so far.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `urls` is empty
    /// - The URL pattern or the HTTP client cannot be initialized
    pub async fn run_scrape(
        config: Config,
        urls: Vec<String>,
        cancel: CancellationToken,
    ) -> Result<ScrapeReport> {
        let stats = Arc::new(ProcessingStats::new());
        let orchestrator = CrawlOrchestrator::from_config(&config, Arc::clone(&stats))
            .context("Failed to initialize scraper")?
            .with_cancellation(cancel);

        info!(
            "Scraping {} URLs ({} worker{}, {}s interval + up to {}s jitter)",
            urls.len(),
            config.workers.max(1),
            if config.workers > 1 { "s" } else { "" },
            config.interval_secs,
            config.offset_secs
        );

        let start_time = Instant::now();
        let total_urls = urls.len();

        let stop_logging = CancellationToken::new();
        let cancel_logging = stop_logging.child_token();
        let stats_for_logging = Arc::clone(&stats);
        let logging_task = tokio::task::spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(LOGGING_INTERVAL));
            // The first tick completes immediately
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(start_time, &stats_for_logging, total_urls);
                    }
                    _ = cancel_logging.cancelled() => {
                        break;
                    }
                }
            }
        });

        let batch = orchestrator.crawl(&urls).await;
        shutdown_gracefully(stop_logging, Some(logging_task)).await;
        let batch = batch.context("Nothing to scrape")?;

        log_progress(start_time, &stats, total_urls);
        print_error_statistics(&stats);

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_summary(
            total_urls,
            batch.products.len(),
            batch.skipped.len(),
            elapsed_seconds,
        );

        Ok(ScrapeReport {
            total_urls,
            products: batch.products,
            skipped: batch.skipped,
            cancelled: batch.cancelled,
            elapsed_seconds,
        })
    }

    /// Collects product URLs from the first `pages` store search pages
    /// (`0` for all of them).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the first search
    /// page cannot be fetched.
    pub async fn discover_urls(config: &Config, pages: u32) -> Result<Vec<String>> {
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let limiter = init_rate_limiter(config.interval(), config.offset());
        discover_product_urls(&client, &limiter, SEARCH_URL_TEMPLATE, pages).await
    }
}
