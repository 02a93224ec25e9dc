//! Configuration constants.
//!
//! This module defines the constants used as defaults throughout the scraper:
//! politeness timing, the fetch contract with the storefront, and the date
//! formats the normalizer understands out of the box.

use std::time::Duration;

/// Base politeness interval between consecutive fetches, in seconds.
pub const DEFAULT_INTERVAL_SECS: u64 = 2;
/// Upper bound of the random jitter added to the base interval, in seconds.
pub const DEFAULT_OFFSET_SECS: u64 = 6;
/// Number of concurrent fetch/parse pipelines.
pub const DEFAULT_WORKERS: usize = 1;
/// Per-request HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Per-URL processing timeout (fetch + body read).
///
/// Slightly above the HTTP timeout so the client's own timeout normally fires first.
pub const URL_PROCESSING_TIMEOUT: Duration = Duration::from_secs(15);
/// Progress logging interval in seconds.
pub const LOGGING_INTERVAL: u64 = 5;

/// User-Agent sent with every storefront request.
///
/// The store serves the full product page to this minimal browser string.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Cookie header that skips the age gate and the mature content interstitial.
pub const AGE_GATE_COOKIES: &str = "birthtime=568022401; mature_content=1";

/// Product page shape accepted by the orchestrator: `/app/<digits>/...`.
pub const DEFAULT_URL_PATTERN: &str = r"^https?://store\.steampowered\.com/app/\d+(/.*)?$";

/// Search listing page, `{}` is replaced by the 1-based page number.
pub const SEARCH_URL_TEMPLATE: &str = "https://store.steampowered.com/search/?hide_filtered_results_warning=1&ignore_preferences=1&page={}";

/// Canonical output pattern for release dates.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Release date input patterns, tried in order. First match wins.
pub const DEFAULT_DATE_INPUT_FORMATS: &[&str] = &[
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b, %Y",
    "%d %B, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %Y",
];

/// Day used when a pattern carries only month and year.
pub const DEFAULT_DAY_OF_MONTH: u32 = 1;

/// Text of the marker heading shown on downloadable content pages.
pub const DLC_MARKER_TEXT: &str = "Downloadable Content";

/// Review summary used when the page has no review block.
pub const MISSING_REVIEW_SUMMARY: &str = "None";

/// Identifier used when the URL carries no numeric app id.
pub const INVALID_PRODUCT_ID: i64 = -1;
