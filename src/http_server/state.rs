//! Shared state handed to every handler.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::cache::CacheBackend;
use crate::factory::DataGenerator;
use crate::lessons::LessonSettings;
use crate::observability::MetricsRegistry;
use crate::store::BookStore;

/// Everything the endpoints depend on, passed in explicitly
pub struct AppState {
    pub store: Arc<BookStore>,
    pub cache: Arc<dyn CacheBackend>,
    pub metrics: Arc<MetricsRegistry>,
    pub settings: LessonSettings,
    pub cache_ttl: Duration,
    generator: Mutex<DataGenerator>,
}

impl AppState {
    pub fn new(
        store: Arc<BookStore>,
        cache: Arc<dyn CacheBackend>,
        metrics: Arc<MetricsRegistry>,
        generator: DataGenerator,
        settings: LessonSettings,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            store,
            cache,
            metrics,
            settings,
            cache_ttl,
            generator: Mutex::new(generator),
        }
    }

    /// Exclusive access to the data generator.
    ///
    /// A panic while generating leaves the RNG usable, so poisoning is
    /// ignored.
    pub fn generator(&self) -> MutexGuard<'_, DataGenerator> {
        self.generator.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
