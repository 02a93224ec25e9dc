//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for skipped URLs, field-level
//! fallbacks and accumulated records during a crawl.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{FieldKind, SkipReason};

/// Thread-safe processing statistics tracker.
///
/// Tracks skipped URLs by reason and field fallbacks by field using atomic
/// counters, so one instance can be shared across workers behind an `Arc`.
/// All keys are initialized to zero on creation.
///
/// # Categories
///
/// - **Skips**: URLs dropped from the batch (document-level failures)
/// - **Field fallbacks**: fields that were replaced by their default value
/// - **Accumulated**: records that made it into the batch
pub struct ProcessingStats {
    skips: HashMap<SkipReason, AtomicUsize>,
    field_fallbacks: HashMap<FieldKind, AtomicUsize>,
    accumulated: AtomicUsize,
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut skips = HashMap::new();
        for reason in SkipReason::iter() {
            skips.insert(reason, AtomicUsize::new(0));
        }

        let mut field_fallbacks = HashMap::new();
        for field in FieldKind::iter() {
            field_fallbacks.insert(field, AtomicUsize::new(0));
        }

        ProcessingStats {
            skips,
            field_fallbacks,
            accumulated: AtomicUsize::new(0),
        }
    }

    /// Increment the counter for a skipped URL.
    pub fn increment_skip(&self, reason: SkipReason) {
        if let Some(counter) = self.skips.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment skip counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                reason
            );
        }
    }

    /// Increment the counter for a field that fell back to its default.
    pub fn increment_field_fallback(&self, field: FieldKind) {
        if let Some(counter) = self.field_fallbacks.get(&field) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment field counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                field
            );
        }
    }

    /// Increment the count of records added to the batch.
    pub fn increment_accumulated(&self) {
        self.accumulated.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the count for a skip reason.
    pub fn get_skip_count(&self, reason: SkipReason) -> usize {
        self.skips
            .get(&reason)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for a field fallback.
    pub fn get_field_fallback_count(&self, field: FieldKind) -> usize {
        self.field_fallbacks
            .get(&field)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Number of records added to the batch.
    pub fn accumulated(&self) -> usize {
        self.accumulated.load(Ordering::SeqCst)
    }

    /// Get total skip count across all reasons.
    pub fn total_skips(&self) -> usize {
        SkipReason::iter().map(|r| self.get_skip_count(r)).sum()
    }

    /// Get total field fallback count across all fields.
    pub fn total_field_fallbacks(&self) -> usize {
        FieldKind::iter()
            .map(|f| self.get_field_fallback_count(f))
            .sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
