//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - HTTP client (User-Agent, age gate cookies, timeout)
//! - Politeness rate limiter
//! - Product URL validator
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;
mod rate_limiter;

use regex::Regex;

use crate::error_handling::InitializationError;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use rate_limiter::{init_rate_limiter, PolitenessLimiter};

/// Compiles the product URL shape pattern.
///
/// # Errors
///
/// Returns `InitializationError::UrlPatternError` if the pattern is not a valid regex.
pub fn init_url_pattern(pattern: &str) -> Result<Regex, InitializationError> {
    Ok(Regex::new(pattern)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_URL_PATTERN;

    #[test]
    fn test_default_url_pattern_compiles() {
        let re = init_url_pattern(DEFAULT_URL_PATTERN).unwrap();
        assert!(re.is_match("https://store.steampowered.com/app/812140/Assassins_Creed_Odyssey/"));
        assert!(re.is_match("http://store.steampowered.com/app/10"));
        assert!(!re.is_match("https://store.steampowered.com/sub/812140/"));
        assert!(!re.is_match("not-a-product-url"));
    }

    #[test]
    fn test_invalid_url_pattern() {
        let result = init_url_pattern("app/(\\d+");
        assert!(matches!(result, Err(InitializationError::UrlPatternError(_))));
    }
}
