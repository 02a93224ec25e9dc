//! Field normalization.
//!
//! Storefront pages render dates and prices in many human formats. This module
//! turns them into canonical values:
//! - Release dates into `YYYY-MM-DD` strings (`DateNormalizer`)
//! - Currency strings into two-digit fixed-point decimals (`parse_price`)

mod date;
mod price;

pub use date::{DateFormatSpec, DateNormalizer};
pub use price::parse_price;
