//! Progress logging utilities.

use log::info;

use crate::error_handling::ProcessingStats;

/// Logs how many URLs have been handled so far and the processing rate.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `stats` - Shared statistics of the running crawl
/// * `total_urls` - Size of the batch
pub fn log_progress(start_time: std::time::Instant, stats: &ProcessingStats, total_urls: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let done = stats.accumulated() + stats.total_skips();
    let rate = if elapsed_secs > 0.0 {
        done as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {}/{} urls ({} scraped, {} skipped) in {:.2} seconds (~{:.2} urls/sec)",
        done,
        total_urls,
        stats.accumulated(),
        stats.total_skips(),
        elapsed_secs,
        rate
    );
}
