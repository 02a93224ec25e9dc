//! Product record assembly.
//!
//! Runs every field extractor against one parsed page and folds the results
//! into a `Product`, replacing each failed field with its default.

use std::sync::Arc;

use rust_decimal::Decimal;
use scraper::Html;

use crate::config::{INVALID_PRODUCT_ID, MISSING_REVIEW_SUMMARY};
use crate::error_handling::{ExtractionError, FieldKind, ProcessingStats, ScrapeError};
use crate::extract::*;
use crate::models::Product;
use crate::normalize::DateNormalizer;

/// Parses a response body into a document tree.
///
/// # Errors
///
/// Returns `ScrapeError::EmptyDocument` when the page has no visible text.
pub fn parse_document(body: &str) -> Result<Html, ScrapeError> {
    let document = Html::parse_document(body);
    if is_empty_document(&document) {
        return Err(ScrapeError::EmptyDocument);
    }
    Ok(document)
}

fn is_empty_document(document: &Html) -> bool {
    document
        .root_element()
        .text()
        .all(|chunk| chunk.trim().is_empty())
}

/// Builds `Product` records from parsed product pages.
#[derive(Clone)]
pub struct RecordAssembler {
    dates: DateNormalizer,
    stats: Arc<ProcessingStats>,
}

impl RecordAssembler {
    /// Creates an assembler that counts field fallbacks in `stats`.
    pub fn new(dates: DateNormalizer, stats: Arc<ProcessingStats>) -> Self {
        Self { dates, stats }
    }

    /// Counters updated by `assemble`.
    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Assembles one product from `document`, fetched from `source_url`.
    ///
    /// Field extraction never aborts assembly: each missing field is logged at
    /// debug level, counted as a field fallback and replaced by its default.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::EmptyDocument` if the document has no text at all.
    pub fn assemble(&self, document: &Html, source_url: &str) -> Result<Product, ScrapeError> {
        if is_empty_document(document) {
            return Err(ScrapeError::EmptyDocument);
        }

        let release_date = self
            .field(FieldKind::ReleaseDate, source_url, extract_release_date_text(document))
            .map(|raw| self.dates.normalize(&raw))
            .unwrap_or_default();
        let original_price = self
            .field(FieldKind::Price, source_url, extract_original_price(document))
            .unwrap_or_else(zero_price);
        // Without any price node both prices stay at zero
        let discount_price = self
            .field(
                FieldKind::DiscountPrice,
                source_url,
                extract_discount_price(document),
            )
            .unwrap_or_else(zero_price);

        Ok(Product {
            id: self
                .field(FieldKind::Id, source_url, extract_id(source_url))
                .unwrap_or(INVALID_PRODUCT_ID),
            app_name: self
                .field(FieldKind::AppName, source_url, extract_app_name(document))
                .unwrap_or_default(),
            url: extract_canonical_url(source_url),
            image_url: self
                .field(FieldKind::ImageUrl, source_url, extract_image_url(document))
                .unwrap_or_default(),
            is_dlc: self
                .field(FieldKind::DlcFlag, source_url, extract_is_dlc(document))
                .unwrap_or(false),
            description: self
                .field(FieldKind::Description, source_url, extract_description(document))
                .unwrap_or_default(),
            release_date,
            developers: self
                .field(FieldKind::Developers, source_url, extract_developers(document))
                .unwrap_or_default(),
            publisher: self
                .field(FieldKind::Publisher, source_url, extract_publisher(document))
                .unwrap_or_default(),
            genres: self
                .field(FieldKind::Genres, source_url, extract_genres(document))
                .unwrap_or_default(),
            tags: self
                .field(FieldKind::Tags, source_url, extract_tags(document))
                .unwrap_or_default(),
            categories: self
                .field(FieldKind::Categories, source_url, extract_categories(document))
                .unwrap_or_default(),
            price: original_price,
            discount_price,
            languages: self
                .field(FieldKind::Languages, source_url, extract_languages(document))
                .unwrap_or_default(),
            review_summary: self
                .field(
                    FieldKind::ReviewSummary,
                    source_url,
                    extract_review_summary(document),
                )
                .unwrap_or_else(|| MISSING_REVIEW_SUMMARY.to_string()),
            reviews_total: self
                .field(
                    FieldKind::ReviewsTotal,
                    source_url,
                    extract_reviews_total(document),
                )
                .unwrap_or(0),
        })
    }

    /// Parses `body` and assembles it in one step.
    pub fn assemble_html(&self, body: &str, source_url: &str) -> Result<Product, ScrapeError> {
        let document = parse_document(body)?;
        self.assemble(&document, source_url)
    }

    /// Turns a field result into an `Option`, recording the fallback.
    fn field<T>(
        &self,
        field: FieldKind,
        source_url: &str,
        result: Result<T, ExtractionError>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("{}: using default {} ({})", source_url, field, e);
                self.stats.increment_field_fallback(field);
                None
            }
        }
    }
}

impl Default for RecordAssembler {
    fn default() -> Self {
        Self::new(DateNormalizer::default(), Arc::new(ProcessingStats::new()))
    }
}

fn zero_price() -> Decimal {
    Decimal::new(0, 2)
}
