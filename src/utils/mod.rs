//! Utility functions shared by the extractors.

mod selector;

pub use selector::parse_selector_with_fallback;
