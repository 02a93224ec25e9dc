//! Per-field extractors.
//!
//! Every extractor is a pure function over the parsed page (or the URL) that
//! returns `Err(ExtractionError)` when its target is missing. None of them
//! panics or aborts the page; the record assembler decides the default.

use rust_decimal::Decimal;
use scraper::{ElementRef, Html};

use super::selectors::*;
use crate::config::DLC_MARKER_TEXT;
use crate::error_handling::ExtractionError;
use crate::normalize::parse_price;

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element_text(element).trim().to_string()
}

/// Collapses every run of whitespace into a single space.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the `index`-th match of a positional selector.
fn nth_match<'a>(
    document: &'a Html,
    selector: &scraper::Selector,
    selector_str: &'static str,
    index: usize,
) -> Result<ElementRef<'a>, ExtractionError> {
    document
        .select(selector)
        .nth(index)
        .ok_or(ExtractionError::MissingNode(selector_str))
}

/// Parses the app id from the second-to-last path segment of the URL.
///
/// `https://store.steampowered.com/app/812140/Assassins_Creed_Odyssey/` gives
/// `812140`.
pub fn extract_id(url: &str) -> Result<i64, ExtractionError> {
    let segment = url
        .trim_end_matches('/')
        .rsplit('/')
        .nth(1)
        .ok_or_else(|| ExtractionError::InvalidNumber(url.to_string()))?;

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExtractionError::InvalidNumber(segment.to_string()));
    }
    segment
        .parse::<i64>()
        .map_err(|_| ExtractionError::InvalidNumber(segment.to_string()))
}

/// Strips the trailing slash and the final path segment (the slug).
pub fn extract_canonical_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    trimmed
        .rsplit_once('/')
        .map_or(trimmed, |(head, _)| head)
        .to_string()
}

/// Trimmed product name.
pub fn extract_app_name(document: &Html) -> Result<String, ExtractionError> {
    nth_match(document, &APP_NAME, APP_NAME_STR, 0).map(trimmed_text)
}

/// Source of the header image.
pub fn extract_image_url(document: &Html) -> Result<String, ExtractionError> {
    let image = nth_match(document, &HEADER_IMAGE, HEADER_IMAGE_STR, 0)?;
    image
        .value()
        .attr("src")
        .map(str::to_string)
        .ok_or(ExtractionError::MissingAttribute {
            selector: HEADER_IMAGE_STR,
            attribute: "src",
        })
}

/// True only when the DLC banner heading reads exactly "Downloadable Content".
pub fn extract_is_dlc(document: &Html) -> Result<bool, ExtractionError> {
    let marker = nth_match(document, &DLC_MARKER, DLC_MARKER_STR, 0)?;
    Ok(trimmed_text(marker) == DLC_MARKER_TEXT)
}

/// Trimmed short description snippet.
pub fn extract_description(document: &Html) -> Result<String, ExtractionError> {
    let snippet = nth_match(document, &DESCRIPTION, DESCRIPTION_STR, 0)?;
    Ok(collapse_whitespace(&element_text(snippet)))
}

/// Raw release date text, before normalization.
pub fn extract_release_date_text(document: &Html) -> Result<String, ExtractionError> {
    let date = nth_match(document, &RELEASE_DATE, RELEASE_DATE_STR, 0)?;
    let text = trimmed_text(date);
    if text.is_empty() {
        return Err(ExtractionError::EmptyText(RELEASE_DATE_STR));
    }
    Ok(text)
}

/// Link texts inside the first developers list.
pub fn extract_developers(document: &Html) -> Result<Vec<String>, ExtractionError> {
    let list = nth_match(document, &DEVELOPERS_LIST, DEVELOPERS_LIST_STR, 0)?;
    Ok(list.select(&LINK_WITH_HREF).map(trimmed_text).collect())
}

/// Link text inside the second dev row.
///
/// The rows are positional: the first one lists developers, the second one the
/// publisher. Pages that reorder them yield the wrong value here.
pub fn extract_publisher(document: &Html) -> Result<String, ExtractionError> {
    let row = nth_match(document, &DEV_ROW, DEV_ROW_STR, 1)?;
    row.select(&LINK_WITH_HREF)
        .next()
        .map(trimmed_text)
        .ok_or(ExtractionError::MissingNode(LINK_WITH_HREF_STR))
}

/// Genre links of the details block.
///
/// Genre links are separated by text nodes (", "), so the walk starts at the
/// first link and repeatedly hops two forward siblings (separator, then the
/// next node). It stops at the first node reached that way which is not an
/// `<a>` element, such as the `<br>` ending the row.
pub fn extract_genres(document: &Html) -> Result<Vec<String>, ExtractionError> {
    let block = nth_match(document, &DETAILS_BLOCK, DETAILS_BLOCK_STR, 0)?;
    let mut link = block
        .select(&LINK)
        .next()
        .ok_or(ExtractionError::MissingNode(LINK_STR))?;

    let mut genres = vec![trimmed_text(link)];
    while let Some(next) = link
        .next_sibling()
        .and_then(|separator| separator.next_sibling())
        .and_then(ElementRef::wrap)
        .filter(|element| element.value().name() == "a")
    {
        genres.push(trimmed_text(next));
        link = next;
    }
    Ok(genres)
}

/// User tags in page order, blanks dropped.
pub fn extract_tags(document: &Html) -> Result<Vec<String>, ExtractionError> {
    let tags: Vec<String> = document.select(&POPULAR_TAGS).map(trimmed_text).collect();
    if tags.is_empty() {
        return Err(ExtractionError::MissingNode(POPULAR_TAGS_STR));
    }
    Ok(tags)
}

/// Name link text of each category spec row; rows without a name are skipped.
pub fn extract_categories(document: &Html) -> Result<Vec<String>, ExtractionError> {
    let mut rows = document.select(&CATEGORY_SPECS).peekable();
    if rows.peek().is_none() {
        return Err(ExtractionError::MissingNode(CATEGORY_SPECS_STR));
    }
    Ok(rows
        .filter_map(|row| row.select(&CATEGORY_NAME).next())
        .map(trimmed_text)
        .filter(|name| !name.is_empty())
        .collect())
}

/// Names of the supported languages, in table order.
pub fn extract_languages(document: &Html) -> Result<Vec<String>, ExtractionError> {
    let languages: Vec<String> = document.select(&LANGUAGES).map(trimmed_text).collect();
    if languages.is_empty() {
        return Err(ExtractionError::MissingNode(LANGUAGES_STR));
    }
    Ok(languages)
}

/// Undiscounted price: the struck-through original price of a discount block,
/// otherwise the plain purchase price.
pub fn extract_original_price(document: &Html) -> Result<Decimal, ExtractionError> {
    let node = document
        .select(&DISCOUNT_ORIGINAL)
        .next()
        .or_else(|| document.select(&PURCHASE_PRICE).next())
        .ok_or(ExtractionError::MissingNode(PURCHASE_PRICE_STR))?;
    Ok(parse_price(&element_text(node)))
}

/// Price actually charged: the discount final price, otherwise the original price.
pub fn extract_discount_price(document: &Html) -> Result<Decimal, ExtractionError> {
    match document.select(&DISCOUNT_FINAL).next() {
        Some(node) => Ok(parse_price(&element_text(node))),
        None => extract_original_price(document),
    }
}

/// Review summary of the second summary column (all-time reviews).
pub fn extract_review_summary(document: &Html) -> Result<String, ExtractionError> {
    let column = nth_match(document, &SUMMARY_COLUMN, SUMMARY_COLUMN_STR, 1)?;
    column
        .select(&REVIEW_SUMMARY)
        .next()
        .map(trimmed_text)
        .ok_or(ExtractionError::MissingNode(REVIEW_SUMMARY_STR))
}

/// Review count of the second summary column, e.g. `(12,345)` gives `12345`.
pub fn extract_reviews_total(document: &Html) -> Result<u64, ExtractionError> {
    let column = nth_match(document, &SUMMARY_COLUMN, SUMMARY_COLUMN_STR, 1)?;
    let raw = column
        .select(&REVIEW_COUNT)
        .next()
        .map(element_text)
        .ok_or(ExtractionError::MissingNode(REVIEW_COUNT_STR))?;

    // Drops the parentheses and locale thousands separators in one pass
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse::<u64>()
        .map_err(|_| ExtractionError::InvalidNumber(raw.trim().to_string()))
}
