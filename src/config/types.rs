//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_INTERVAL_SECS, DEFAULT_OFFSET_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_URL_PATTERN,
    DEFAULT_USER_AGENT, DEFAULT_WORKERS,
};
use crate::normalize::DateFormatSpec;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Scraper configuration.
///
/// Parsed from the command line by the binary, or built programmatically
/// (usually starting from `Config::default()`) by library callers.
///
/// # Examples
///
/// ```no_run
/// use steam_products::Config;
///
/// let config = Config {
///     interval_secs: 1,
///     offset_secs: 2,
///     workers: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "steam_products",
    version,
    about = "Scrapes Steam store product pages into normalized JSON Lines records"
)]
pub struct Config {
    /// File with product page URLs, one per line ("-" reads stdin)
    #[arg(value_name = "FILE", required_unless_present = "search_pages")]
    pub file: Option<PathBuf>,

    /// Discover product URLs from the first N store search pages instead of a file
    #[arg(long, value_name = "N", conflicts_with = "file")]
    pub search_pages: Option<u32>,

    /// Write JSON Lines output here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Base delay between consecutive requests, in seconds
    #[arg(long = "interval", env = "SCRAPE_INTERVAL", default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval_secs: u64,

    /// Upper bound of the random extra delay added to the interval, in seconds
    #[arg(long = "offset", env = "SCRAPE_OFFSET", default_value_t = DEFAULT_OFFSET_SECS)]
    pub offset_secs: u64,

    /// Number of concurrent fetch/parse pipelines (request rate is shared)
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Per-request timeout in seconds
    #[arg(long = "timeout", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Regex a URL must match to be fetched
    #[arg(long, default_value = DEFAULT_URL_PATTERN)]
    pub url_pattern: String,

    /// Extra release date input pattern (strftime syntax), tried after the built-in ones
    #[arg(long = "date-format", value_name = "PATTERN")]
    pub extra_date_formats: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Config {
    /// Base politeness interval.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Upper bound of the politeness jitter.
    pub fn offset(&self) -> Duration {
        Duration::from_secs(self.offset_secs)
    }

    /// Built-in date formats followed by any user supplied ones.
    pub fn date_format_spec(&self) -> DateFormatSpec {
        self.extra_date_formats
            .iter()
            .fold(DateFormatSpec::default(), |spec, format| {
                spec.with_input_format(format.clone())
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            search_pages: None,
            output: None,
            interval_secs: DEFAULT_INTERVAL_SECS,
            offset_secs: DEFAULT_OFFSET_SECS,
            workers: DEFAULT_WORKERS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            url_pattern: DEFAULT_URL_PATTERN.to_string(),
            extra_date_formats: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.interval_secs, 2);
        assert_eq!(config.offset_secs, 6);
        assert_eq!(config.workers, 1);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert!(config.file.is_none());
        assert!(config.extra_date_formats.is_empty());
    }

    #[test]
    fn test_date_format_spec_appends_extra_formats() {
        let config = Config {
            extra_date_formats: vec!["%Y/%m/%d".to_string()],
            ..Default::default()
        };
        let spec = config.date_format_spec();
        assert_eq!(spec.input_formats().last().map(String::as_str), Some("%Y/%m/%d"));
        assert_eq!(spec.input_formats().len(), 10);
    }

    #[test]
    fn test_parse_cli_defaults() {
        let config = Config::try_parse_from(["steam_products", "urls.txt"]).unwrap();
        assert_eq!(config.file, Some(PathBuf::from("urls.txt")));
        assert_eq!(config.url_pattern, DEFAULT_URL_PATTERN);
        assert_eq!(config.workers, 1);
    }

    #[test]
    fn test_parse_cli_requires_input() {
        assert!(Config::try_parse_from(["steam_products"]).is_err());
        let config = Config::try_parse_from(["steam_products", "--search-pages", "3"]).unwrap();
        assert_eq!(config.search_pages, Some(3));
        assert!(config.file.is_none());
    }
}
