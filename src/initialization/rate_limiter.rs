//! Politeness rate limiter initialization.
//!
//! This module provides the shared limiter that spaces storefront requests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use tokio::time::Instant;

/// Spaces consecutive requests by a base interval plus random jitter.
///
/// The limiter keeps a single next-allowed-time marker. Each `acquire` reserves
/// the next free slot and pushes the marker forward by `interval + jitter`,
/// where jitter is drawn uniformly from `[0, max_jitter]`. Because slots are
/// reserved under one lock, the aggregate request rate is the same whether one
/// worker or many share the limiter. The first request is never delayed.
#[derive(Debug)]
pub struct PolitenessLimiter {
    interval: Duration,
    max_jitter: Duration,
    next_allowed: Mutex<Option<Instant>>,
}

impl PolitenessLimiter {
    /// Creates a limiter that spaces requests by `interval` plus up to `max_jitter`.
    pub fn new(interval: Duration, max_jitter: Duration) -> Self {
        Self {
            interval,
            max_jitter,
            next_allowed: Mutex::new(None),
        }
    }

    /// Waits until the caller may issue its request.
    ///
    /// Dropping the returned future (e.g. on cancellation) forfeits the
    /// reserved slot; later callers are still spaced correctly.
    pub async fn acquire(&self) {
        let slot = self.reserve_slot();
        let now = Instant::now();
        if slot > now {
            log::debug!(
                "Politeness delay: waiting {:.2}s before next request",
                (slot - now).as_secs_f64()
            );
            tokio::time::sleep_until(slot).await;
        }
    }

    fn reserve_slot(&self) -> Instant {
        let now = Instant::now();
        let delay = self.interval + self.sample_jitter();
        // A poisoned lock only means another worker panicked mid-update; the
        // marker itself is always a valid instant.
        let mut next = self
            .next_allowed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let slot = match *next {
            Some(at) if at > now => at,
            _ => now,
        };
        *next = Some(slot + delay);
        slot
    }

    fn sample_jitter(&self) -> Duration {
        let max_ms = u64::try_from(self.max_jitter.as_millis()).unwrap_or(u64::MAX);
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::rng().random_range(0..=max_ms))
    }

    /// Base delay between requests.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Upper bound of the random extra delay.
    pub fn max_jitter(&self) -> Duration {
        self.max_jitter
    }
}

/// Initializes the shared politeness limiter.
///
/// # Arguments
///
/// * `interval` - Base delay between consecutive requests
/// * `max_jitter` - Upper bound of the uniformly random extra delay
pub fn init_rate_limiter(interval: Duration, max_jitter: Duration) -> Arc<PolitenessLimiter> {
    log::debug!(
        "Politeness limiter: {}s base interval, up to {}s jitter",
        interval.as_secs_f64(),
        max_jitter.as_secs_f64()
    );
    Arc::new(PolitenessLimiter::new(interval, max_jitter))
}
