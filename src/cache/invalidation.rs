//! Write-triggered cache invalidation.

use std::sync::Arc;

use tracing::debug;

use crate::observability::MetricsRegistry;
use crate::store::{Book, BookWriteHook};

use super::backend::CacheBackend;
use super::pattern::KeyPattern;

/// Remove every cache entry whose key matches `pattern`
pub fn invalidate_matching(cache: &dyn CacheBackend, pattern: &KeyPattern) -> usize {
    let removed = cache.delete_pattern(pattern);
    debug!(%pattern, removed, "cache entries invalidated");
    removed
}

/// Clears matching cache entries after every committed Book write.
///
/// Registered on the store at construction time; the store calls it on the
/// writer's thread once the rows are visible.
pub struct InvalidationHook {
    cache: Arc<dyn CacheBackend>,
    pattern: KeyPattern,
    metrics: Option<Arc<MetricsRegistry>>,
}

impl InvalidationHook {
    pub fn new(cache: Arc<dyn CacheBackend>, pattern: KeyPattern) -> Self {
        Self {
            cache,
            pattern,
            metrics: None,
        }
    }

    /// Count invalidated entries in `metrics`
    pub fn with_metrics(mut self, metrics: Arc<MetricsRegistry>) -> Self {
        self.metrics = Some(metrics);
        self
    }
}

impl BookWriteHook for InvalidationHook {
    fn on_write(&self, written: &[Book]) {
        let removed = invalidate_matching(self.cache.as_ref(), &self.pattern);
        if let Some(metrics) = &self.metrics {
            metrics.add_cache_invalidations(removed as u64);
        }
        debug!(books = written.len(), removed, "book write invalidated cache");
    }
}
