//! HTTP client initialization.
//!
//! This module builds the storefront HTTP client: fixed User-Agent, the age
//! gate cookies on every request, and a per-request timeout.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::ClientBuilder;

use crate::config::{Config, AGE_GATE_COOKIES};

/// Initializes the HTTP client used for product and search pages.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config (`Mozilla/5.0` by default)
/// - `Cookie: birthtime=568022401; mature_content=1`, which skips the age
///   verification and mature content interstitials
/// - Timeout from the config
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails (for example when the
/// User-Agent contains characters that are invalid in a header).
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static(AGE_GATE_COOKIES));

    let client = ClientBuilder::new()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
