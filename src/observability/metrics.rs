//! Metrics registry for shelfbench
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start
//! - Thread-safe but lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::store::{Book, BookWriteHook};

/// Registry of service counters
///
/// All counters use Relaxed ordering; readers only need eventual values.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Responses that went through the timing wrapper
    requests_timed: AtomicU64,
    /// Timed requests whose operation failed
    requests_failed: AtomicU64,
    /// Cached pages served without running the handler
    cache_hits: AtomicU64,
    /// Cached pages that had to be rendered
    cache_misses: AtomicU64,
    /// Cache entries removed by write-triggered invalidation
    cache_invalidations: AtomicU64,
    /// Book rows committed
    books_written: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests_timed(&self) {
        self.requests_timed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_requests_failed(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_cache_hits(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_cache_misses(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_cache_invalidations(&self, count: u64) {
        self.cache_invalidations.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_books_written(&self, count: u64) {
        self.books_written.fetch_add(count, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_timed: self.requests_timed.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            cache_invalidations: self.cache_invalidations.load(Ordering::Relaxed),
            books_written: self.books_written.load(Ordering::Relaxed),
        }
    }
}

/// Counts committed book rows
impl BookWriteHook for MetricsRegistry {
    fn on_write(&self, written: &[Book]) {
        self.add_books_written(written.len() as u64);
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_timed: u64,
    pub requests_failed: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cache_invalidations: u64,
    pub books_written: u64,
}
