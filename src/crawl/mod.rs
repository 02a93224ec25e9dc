//! Crawl orchestration.
//!
//! Drives a batch of product URLs through validate, fetch, parse and
//! accumulate. Every per-URL failure becomes a skip; the batch itself only
//! fails when it is empty.

mod validate;

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use regex::Regex;
use tokio_util::sync::CancellationToken;

use crate::config::{Config, URL_PROCESSING_TIMEOUT};
use crate::error_handling::{InitializationError, ProcessingStats, ScrapeError, SkipReason};
use crate::initialization::{init_client, init_rate_limiter, init_url_pattern, PolitenessLimiter};
use crate::models::Product;
use crate::normalize::DateNormalizer;
use crate::record::RecordAssembler;

pub use validate::validate_product_url;

/// A URL that was dropped from the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedUrl {
    /// URL as given in the input
    pub url: String,
    /// Why it was skipped
    pub reason: SkipReason,
    /// Human readable cause (HTTP status, client error, pattern mismatch)
    pub detail: String,
}

impl SkippedUrl {
    fn new(url: &str, reason: SkipReason, detail: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            reason,
            detail: detail.into(),
        }
    }
}

/// Records collected from one `crawl` call.
#[derive(Debug, Clone, Default)]
pub struct CrawlBatch {
    /// Assembled products, in input order when there is one worker
    pub products: Vec<Product>,
    /// URLs dropped along the way
    pub skipped: Vec<SkippedUrl>,
    /// True when the crawl stopped early on cancellation
    pub cancelled: bool,
}

/// Called once for every skipped URL, as soon as it is skipped.
pub type SkipCallback = Arc<dyn Fn(&SkippedUrl) + Send + Sync>;

/// Fetches product pages politely and assembles them into records.
///
/// All workers share one `PolitenessLimiter`, so raising `workers` overlaps
/// slow fetches without raising the request rate.
pub struct CrawlOrchestrator {
    url_pattern: Regex,
    client: Arc<reqwest::Client>,
    limiter: Arc<PolitenessLimiter>,
    assembler: RecordAssembler,
    workers: usize,
    url_timeout: Duration,
    on_skip: Option<SkipCallback>,
    cancel: CancellationToken,
}

impl CrawlOrchestrator {
    /// Creates an orchestrator with one worker and the default per-URL timeout.
    pub fn new(
        url_pattern: Regex,
        client: Arc<reqwest::Client>,
        limiter: Arc<PolitenessLimiter>,
        assembler: RecordAssembler,
    ) -> Self {
        Self {
            url_pattern,
            client,
            limiter,
            assembler,
            workers: 1,
            url_timeout: URL_PROCESSING_TIMEOUT,
            on_skip: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Builds an orchestrator and all of its resources from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if the URL pattern does not compile or the
    /// HTTP client cannot be built.
    pub fn from_config(
        config: &Config,
        stats: Arc<ProcessingStats>,
    ) -> Result<Self, InitializationError> {
        let url_pattern = init_url_pattern(&config.url_pattern)?;
        let client = init_client(config)?;
        let limiter = init_rate_limiter(config.interval(), config.offset());
        let assembler = RecordAssembler::new(DateNormalizer::new(config.date_format_spec()), stats);

        Ok(Self::new(url_pattern, client, limiter, assembler)
            .with_workers(config.workers)
            .with_url_timeout(URL_PROCESSING_TIMEOUT.max(Duration::from_secs(config.timeout_seconds))))
    }

    /// Sets the number of concurrent fetch/parse pipelines (at least one).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Bounds each fetch, excluding the politeness wait before it.
    pub fn with_url_timeout(mut self, url_timeout: Duration) -> Self {
        self.url_timeout = url_timeout;
        self
    }

    /// Registers a callback invoked for every skipped URL.
    pub fn with_skip_callback(mut self, on_skip: SkipCallback) -> Self {
        self.on_skip = Some(on_skip);
        self
    }

    /// Stops the crawl between URLs (and during politeness waits) once cancelled.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Counters shared with the record assembler.
    pub fn stats(&self) -> &Arc<ProcessingStats> {
        self.assembler.stats()
    }

    /// The politeness limiter shared by all workers.
    pub fn limiter(&self) -> &Arc<PolitenessLimiter> {
        &self.limiter
    }

    /// The HTTP client used for product pages.
    pub fn client(&self) -> &Arc<reqwest::Client> {
        &self.client
    }

    /// Scrapes every URL of `urls`.
    ///
    /// With a single worker the records keep the input order. On cancellation
    /// the records gathered so far are returned with `cancelled` set.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::EmptyBatch` if `urls` is empty. Per-URL failures
    /// never fail the batch; they are listed in `CrawlBatch::skipped`.
    pub async fn crawl(&self, urls: &[String]) -> Result<CrawlBatch, ScrapeError> {
        if urls.is_empty() {
            return Err(ScrapeError::EmptyBatch);
        }

        let mut batch = CrawlBatch::default();
        let mut outcomes = stream::iter(urls)
            .map(|url| self.scrape_one(url))
            .buffer_unordered(self.workers);

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    log::warn!(
                        "Crawl cancelled with {} of {} urls done",
                        batch.products.len() + batch.skipped.len(),
                        urls.len()
                    );
                    batch.cancelled = true;
                    break;
                }
                outcome = outcomes.next() => match outcome {
                    Some(Ok(product)) => {
                        self.stats().increment_accumulated();
                        batch.products.push(product);
                    }
                    Some(Err(skipped)) => {
                        self.record_skip(&skipped);
                        batch.skipped.push(skipped);
                    }
                    None => break,
                },
            }
        }

        Ok(batch)
    }

    async fn scrape_one(&self, url: &str) -> Result<Product, SkippedUrl> {
        validate_product_url(&self.url_pattern, url)
            .map_err(|detail| SkippedUrl::new(url, SkipReason::InvalidUrl, detail))?;

        self.limiter.acquire().await;

        let body = match tokio::time::timeout(self.url_timeout, self.fetch(url)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(SkippedUrl::new(
                    url,
                    SkipReason::Timeout,
                    format!("no response within {}s", self.url_timeout.as_secs()),
                ))
            }
        };

        // The document is parsed and dropped here, never held across an await
        let product = self
            .assembler
            .assemble_html(&body, url)
            .map_err(|e| SkippedUrl::new(url, SkipReason::EmptyDocument, e.to_string()))?;
        log::debug!("Scraped {} ({})", product.app_name, url);
        Ok(product)
    }

    async fn fetch(&self, url: &str) -> Result<String, SkippedUrl> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SkippedUrl::new(
                url,
                SkipReason::HttpStatus,
                format!("HTTP {status}"),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| classify_request_error(url, e))
    }

    fn record_skip(&self, skipped: &SkippedUrl) {
        log::warn!(
            "Skipping {}: {} ({})",
            skipped.url,
            skipped.reason,
            skipped.detail
        );
        self.stats().increment_skip(skipped.reason);
        if let Some(on_skip) = &self.on_skip {
            on_skip(skipped);
        }
    }
}

fn classify_request_error(url: &str, e: reqwest::Error) -> SkippedUrl {
    let reason = if e.is_timeout() {
        SkipReason::Timeout
    } else if e.status().is_some() {
        SkipReason::HttpStatus
    } else {
        SkipReason::Fetch
    };
    SkippedUrl::new(url, reason, e.to_string())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
