//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FieldKind, ProcessingStats, SkipReason};

/// Prints skip and field fallback counts to the log.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let total_skips = stats.total_skips();
    let total_fallbacks = stats.total_field_fallbacks();

    if total_skips > 0 {
        info!("Skipped URL Counts ({} total):", total_skips);
        for reason in SkipReason::iter() {
            let count = stats.get_skip_count(reason);
            if count > 0 {
                info!("   {}: {}", reason.as_str(), count);
            }
        }
    }

    if total_fallbacks > 0 {
        info!("Missing Field Counts ({} total):", total_fallbacks);
        for field in FieldKind::iter() {
            let count = stats.get_field_fallback_count(field);
            if count > 0 {
                info!("   {}: {}", field.as_str(), count);
            }
        }
    }
}

/// Logs the one-line summary of a run.
pub fn print_summary(total_urls: usize, scraped: usize, skipped: usize, elapsed_seconds: f64) {
    info!(
        "✅ Processed {} URL{} ({} scraped, {} skipped) in {:.1}s",
        total_urls,
        if total_urls == 1 { "" } else { "s" },
        scraped,
        skipped,
        elapsed_seconds
    );
}
