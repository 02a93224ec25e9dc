//! Error type definitions.
//!
//! This module defines the three error tiers of the scraper:
//! - `ExtractionError`: a single field could not be read (recovered with a default)
//! - `SkipReason`: a whole URL was dropped (recovered by the orchestrator)
//! - `ScrapeError`: caller-facing errors

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured product URL pattern is not a valid regex.
    #[error("Invalid URL pattern: {0}")]
    UrlPatternError(#[from] regex::Error),
}

/// Errors surfaced to callers of the scraping API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// The orchestrator was handed no URLs at all.
    #[error("no urls to scrape provided")]
    EmptyBatch,

    /// The fetched page has no text content.
    #[error("document has no text content")]
    EmptyDocument,
}

/// Field-level extraction failure.
///
/// Every extractor returns one of these instead of a value when its target is
/// missing. Callers never propagate it: they substitute the field's default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No node matched the selector (or the positional index was out of range).
    #[error("no node matches '{0}'")]
    MissingNode(&'static str),

    /// The node exists but lacks the attribute.
    #[error("node '{selector}' has no '{attribute}' attribute")]
    MissingAttribute {
        /// Selector of the matched node
        selector: &'static str,
        /// Attribute that was expected on it
        attribute: &'static str,
    },

    /// The node exists but its text is empty.
    #[error("node '{0}' has no text")]
    EmptyText(&'static str),

    /// The text could not be read as a number.
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}

/// Reasons a URL is dropped from a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    /// The URL does not match the product page pattern.
    InvalidUrl,
    /// Connection, DNS, TLS or body read failure.
    Fetch,
    /// The server answered with a non-2xx status.
    HttpStatus,
    /// The per-URL timeout elapsed.
    Timeout,
    /// The page parsed to a document without text.
    EmptyDocument,
}

impl SkipReason {
    /// Human readable label used in the statistics report.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::InvalidUrl => "Invalid product URL",
            SkipReason::Fetch => "Fetch error",
            SkipReason::HttpStatus => "Non-success HTTP status",
            SkipReason::Timeout => "Fetch timeout",
            SkipReason::EmptyDocument => "Empty document",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product attributes read by the field extractors.
///
/// Used to count field-level fallbacks in `ProcessingStats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FieldKind {
    /// App id parsed from the URL
    Id,
    /// Product name
    AppName,
    /// Header image
    ImageUrl,
    /// Downloadable content notice
    DlcFlag,
    /// Short description
    Description,
    /// Release date
    ReleaseDate,
    /// Developer links
    Developers,
    /// Publisher link
    Publisher,
    /// Genre links
    Genres,
    /// User tags
    Tags,
    /// Feature categories
    Categories,
    /// Supported languages
    Languages,
    /// Original price
    Price,
    /// Discounted price
    DiscountPrice,
    /// Review summary label
    ReviewSummary,
    /// Review count
    ReviewsTotal,
}

impl FieldKind {
    /// Name of the `Product` field this kind stands for.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Id => "id",
            FieldKind::AppName => "app_name",
            FieldKind::ImageUrl => "image_url",
            FieldKind::DlcFlag => "is_dlc",
            FieldKind::Description => "description",
            FieldKind::ReleaseDate => "release_date",
            FieldKind::Developers => "developers",
            FieldKind::Publisher => "publisher",
            FieldKind::Genres => "genres",
            FieldKind::Tags => "tags",
            FieldKind::Categories => "categories",
            FieldKind::Languages => "languages",
            FieldKind::Price => "price",
            FieldKind::DiscountPrice => "discount_price",
            FieldKind::ReviewSummary => "review_summary",
            FieldKind::ReviewsTotal => "reviews_total",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
