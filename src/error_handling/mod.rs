//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for each failure tier
//! - Processing statistics tracking (skipped URLs, field fallbacks)
//!
//! Failures are categorized into:
//! - **Field-level**: one attribute is missing from the page; a default is used
//! - **Document-level**: the URL is skipped and the batch continues
//! - **Batch-level**: the caller passed no URLs; returned as an error

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ExtractionError, FieldKind, InitializationError, ScrapeError, SkipReason};
