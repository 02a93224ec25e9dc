//! Product URL discovery from the store search listing.
//!
//! Search result pages link every product with an `a.search_result_row`
//! anchor; the pagination bar tells how many pages exist.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use scraper::{Html, Selector};

use crate::initialization::PolitenessLimiter;
use crate::utils::parse_selector_with_fallback;

static SEARCH_RESULT_ROW: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("a.search_result_row[href]", "search result row"));
static PAGINATION_LINK: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback("div.search_pagination_right a", "search pagination link")
});

/// Product links of one search page, with tracking query strings removed.
pub fn parse_product_links(document: &Html) -> Vec<String> {
    document
        .select(&SEARCH_RESULT_ROW)
        .filter_map(|row| row.value().attr("href"))
        .map(|href| {
            href.rsplit_once('?')
                .map_or(href, |(base, _)| base)
                .to_string()
        })
        .collect()
}

/// Total number of search pages, read from the second-to-last pagination link
/// (the last one is the "next" arrow).
pub fn parse_total_pages(document: &Html) -> Option<u32> {
    let links: Vec<_> = document.select(&PAGINATION_LINK).collect();
    let label = links.len().checked_sub(2).map(|i| links[i])?;
    label.text().collect::<String>().trim().parse().ok()
}

/// Fetches search pages `1..=pages` and concatenates their product links.
///
/// `pages == 0` means every page the pagination bar reports. A requested count
/// beyond the reported total is capped. Pages that fail to load are logged and
/// skipped.
///
/// # Errors
///
/// Returns an error only if the first search page cannot be fetched.
pub async fn discover_product_urls(
    client: &reqwest::Client,
    limiter: &PolitenessLimiter,
    url_template: &str,
    pages: u32,
) -> Result<Vec<String>> {
    let first_body = fetch_page(client, limiter, url_template, 1)
        .await
        .context("Failed to fetch the first search page")?;
    let (mut urls, total_pages) = {
        let document = Html::parse_document(&first_body);
        (parse_product_links(&document), parse_total_pages(&document))
    };

    let last_page = match (pages, total_pages) {
        (0, Some(total)) => total,
        (0, None) => 1,
        (requested, Some(total)) => requested.min(total),
        (requested, None) => requested,
    };
    log::info!(
        "Discovering product urls from {} search page{} (store reports {})",
        last_page,
        if last_page == 1 { "" } else { "s" },
        total_pages.map_or_else(|| "an unknown number".to_string(), |t| t.to_string())
    );

    for page in 2..=last_page {
        match fetch_page(client, limiter, url_template, page).await {
            Ok(body) => {
                let links = parse_product_links(&Html::parse_document(&body));
                if links.is_empty() {
                    log::debug!("Search page {} lists no products", page);
                }
                urls.extend(links);
            }
            Err(e) => log::warn!("Skipping search page {}: {:#}", page, e),
        }
    }

    log::info!("Discovered {} product urls", urls.len());
    Ok(urls)
}

async fn fetch_page(
    client: &reqwest::Client,
    limiter: &PolitenessLimiter,
    url_template: &str,
    page: u32,
) -> Result<String> {
    limiter.acquire().await;
    let url = url_template.replace("{}", &page.to_string());
    let body = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request to {url} failed"))?
        .error_for_status()
        .with_context(|| format!("Search page {page} returned an error status"))?
        .text()
        .await
        .with_context(|| format!("Failed to read search page {page}"))?;
    Ok(body)
}
