//! Product page field extraction.
//!
//! This module reads individual product attributes from a parsed storefront
//! page:
//! - Identity (app id, canonical URL, name, header image, DLC flag)
//! - Text (description, raw release date, developers, publisher)
//! - Lists (genres, tags, categories, languages)
//! - Prices (original and discounted)
//! - Reviews (summary and count)
//!
//! Extractors are fail-soft: they report a missing node as an
//! `ExtractionError` value and never touch other fields. All lookups use CSS
//! selectors via the `scraper` crate, except the genre walk which follows
//! sibling pointers.

mod fields;
mod selectors;

// Re-export public API
pub use fields::{
    extract_app_name, extract_canonical_url, extract_categories, extract_description,
    extract_developers, extract_discount_price, extract_genres, extract_id, extract_image_url,
    extract_is_dlc, extract_languages, extract_original_price, extract_publisher,
    extract_release_date_text, extract_review_summary, extract_reviews_total, extract_tags,
};
