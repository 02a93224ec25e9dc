//! URL list input.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Reads product URLs from `path`, or from stdin when `path` is `-`.
///
/// Blank lines and lines starting with `#` are ignored; every other line is
/// trimmed and kept in order. Validation happens later, in the crawl.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn read_urls(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == "-" {
        log::info!("Reading URLs from stdin");
        return parse_url_lines(tokio::io::stdin()).await;
    }

    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let urls = parse_url_lines(file).await?;
    log::info!("Total URLs in file: {}", urls.len());
    Ok(urls)
}

/// Collects the URL lines of `reader`.
pub async fn parse_url_lines<R: AsyncRead + Unpin>(reader: R) -> Result<Vec<String>> {
    let mut lines = BufReader::new(reader).lines();
    let mut urls = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read line from input")?
    {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        urls.push(trimmed.to_string());
    }
    Ok(urls)
}
