use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{INVALID_PRODUCT_ID, MISSING_REVIEW_SUMMARY};

/// One storefront product, normalized.
///
/// Every field has a default that stands in when the page omits it; a product
/// is only missing entirely when its page could not be fetched or was empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// App id from the URL, `-1` when the URL has none
    pub id: i64,
    /// Display name
    pub app_name: String,
    /// Product URL without the trailing slug
    pub url: String,
    /// Header image
    pub image_url: String,
    /// Whether the page carries the downloadable content notice
    pub is_dlc: bool,
    /// Short description snippet
    pub description: String,
    /// `YYYY-MM-DD`, or empty when the page date was missing or unrecognized
    pub release_date: String,
    pub developers: Vec<String>,
    /// First publisher link of the second developer row
    pub publisher: String,
    pub genres: Vec<String>,
    /// User tags, in page order
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    /// Original price, `0.00` when free or missing
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Discounted price, `0.00` when there is no discount
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_price: Decimal,
    pub languages: Vec<String>,
    /// All-time review summary such as "Very Positive"
    pub review_summary: String,
    /// Number of all-time reviews
    pub reviews_total: u64,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: INVALID_PRODUCT_ID,
            app_name: String::new(),
            url: String::new(),
            image_url: String::new(),
            is_dlc: false,
            description: String::new(),
            release_date: String::new(),
            developers: Vec::new(),
            publisher: String::new(),
            genres: Vec::new(),
            tags: Vec::new(),
            categories: Vec::new(),
            price: Decimal::new(0, 2),
            discount_price: Decimal::new(0, 2),
            languages: Vec::new(),
            review_summary: MISSING_REVIEW_SUMMARY.to_string(),
            reviews_total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_defaults() {
        let product = Product::default();
        assert_eq!(product.id, -1);
        assert_eq!(product.review_summary, "None");
        assert_eq!(product.price.to_string(), "0.00");
        assert!(!product.is_dlc);
        assert!(product.developers.is_empty());
    }

    #[test]
    fn test_product_serializes_prices_as_numbers() {
        let product = Product {
            id: 812140,
            price: Decimal::new(5999, 2),
            discount_price: Decimal::new(2999, 2),
            ..Default::default()
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], 812140);
        let price = value["price"].as_f64().unwrap();
        let discount = value["discount_price"].as_f64().unwrap();
        assert!((price - 59.99).abs() < 1e-9);
        assert!((discount - 29.99).abs() < 1e-9);
        assert_eq!(value["review_summary"], "None");
    }
}
