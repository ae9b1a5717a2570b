//! Cache backend trait and the in-process implementation.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::pattern::KeyPattern;

/// A rendered response as kept in the cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub status: u16,
    pub body: Value,
}

/// Key-value store for rendered responses.
///
/// All operations are best-effort: a broken backend reads as empty and
/// drops writes rather than failing the request that uses it.
pub trait CacheBackend: Send + Sync {
    /// Fetch a live entry
    fn get(&self, key: &str) -> Option<CachedResponse>;

    /// Store an entry that expires after `ttl`
    fn set(&self, key: &str, value: CachedResponse, ttl: Duration);

    /// Remove every key matching `pattern`, returning how many were removed
    fn delete_pattern(&self, pattern: &KeyPattern) -> usize;

    /// Number of live entries
    fn len(&self) -> usize;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct Entry {
    value: CachedResponse,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Process-local cache with lazy expiry
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently held, live or not, sorted
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<_> = entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl CacheBackend for InMemoryCache {
    fn get(&self, key: &str) -> Option<CachedResponse> {
        let now = Instant::now();
        {
            let entries = match self.entries.read() {
                Ok(entries) => entries,
                Err(_) => {
                    warn!(key, "cache lock poisoned, treating as miss");
                    return None;
                }
            };
            match entries.get(key) {
                Some(entry) if entry.is_live(now) => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Expired: drop it so the map does not grow with dead pages.
        if let Ok(mut entries) = self.entries.write() {
            if entries.get(key).is_some_and(|e| !e.is_live(now)) {
                entries.remove(key);
            }
        }
        None
    }

    fn set(&self, key: &str, value: CachedResponse, ttl: Duration) {
        let Some(expires_at) = Instant::now().checked_add(ttl) else {
            warn!(key, ?ttl, "cache ttl out of range, entry dropped");
            return;
        };

        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(key.to_string(), Entry { value, expires_at });
            }
            Err(_) => warn!(key, "cache lock poisoned, entry dropped"),
        }
    }

    fn delete_pattern(&self, pattern: &KeyPattern) -> usize {
        match self.entries.write() {
            Ok(mut entries) => {
                let before = entries.len();
                entries.retain(|key, _| !pattern.matches(key));
                before - entries.len()
            }
            Err(_) => {
                warn!(%pattern, "cache lock poisoned, invalidation skipped");
                0
            }
        }
    }

    fn len(&self) -> usize {
        let now = Instant::now();
        match self.entries.read() {
            Ok(entries) => entries.values().filter(|e| e.is_live(now)).count(),
            Err(_) => 0,
        }
    }
}
