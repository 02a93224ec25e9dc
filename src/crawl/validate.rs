//! Product URL validation.

use regex::Regex;

/// Maximum URL length (2048 characters), matching common browser and server limits.
const MAX_URL_LENGTH: usize = 2048;

/// Checks that `url` is a fetchable product page URL.
///
/// The URL must fit within `MAX_URL_LENGTH`, parse as an absolute http(s) URL
/// and match the product page `pattern`.
///
/// # Returns
///
/// `Ok(())` if the URL should be fetched, otherwise a short description of why
/// it was rejected.
pub fn validate_product_url(pattern: &Regex, url: &str) -> Result<(), String> {
    if url.len() > MAX_URL_LENGTH {
        return Err(format!(
            "url exceeds maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        ));
    }

    match url::Url::parse(url) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => {}
            scheme => return Err(format!("unsupported scheme '{scheme}'")),
        },
        Err(e) => return Err(format!("invalid url: {e}")),
    }

    if !pattern.is_match(url) {
        return Err(format!("url does not match '{}'", pattern.as_str()));
    }
    Ok(())
}
