//! # Response Cache
//!
//! A key-value cache for rendered responses with per-entry TTL and
//! glob-pattern bulk deletion, plus the write-path hook that clears
//! matching entries whenever books are written.
//!
//! Keys follow `cache_page.<prefix>.GET.<path>`, so every cached book
//! listing carries the `books` prefix and the default `*books*` pattern
//! clears them all.

mod backend;
mod invalidation;
mod pattern;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use backend::{CacheBackend, CachedResponse, InMemoryCache};
pub use invalidation::{invalidate_matching, InvalidationHook};
pub use pattern::KeyPattern;

/// Cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Lifetime of a cached page in seconds (default: 900)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Keys cleared after a book write (default: "*books*")
    #[serde(default = "default_invalidation_pattern")]
    pub invalidation_pattern: String,
}

fn default_ttl_secs() -> u64 {
    15 * 60
}

fn default_invalidation_pattern() -> String {
    "*books*".to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            invalidation_pattern: default_invalidation_pattern(),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Build the key a cached page is stored under
pub fn page_key(prefix: &str, path: &str) -> String {
    format!("cache_page.{}.GET.{}", prefix, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_matches_default_pattern() {
        let key = page_key("books", "/api/ex5/caching/");
        assert_eq!(key, "cache_page.books.GET./api/ex5/caching/");

        let pattern = KeyPattern::parse(&CacheConfig::default().invalidation_pattern).unwrap();
        assert!(pattern.matches(&key));
    }

    #[test]
    fn test_default_ttl() {
        assert_eq!(CacheConfig::default().ttl(), Duration::from_secs(900));
    }
}
