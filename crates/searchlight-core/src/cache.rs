use crate::consts::MAX_CACHE_TTL_SECS;
use serde::Serialize;
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::debug;

type Payload = Arc<dyn Any + Send + Sync>;

struct CacheEntry {
    data: Payload,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
}

/// In-memory key/value store with per-entry expiry.
///
/// Values of any type share one key space; each is stored behind an `Arc` and
/// handed back without copying. Expired entries are only removed when read or
/// on [`TtlCache::clear`]. There is no size bound.
#[derive(Default)]
pub struct TtlCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the map half-updated.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns the live value under `key`.
    ///
    /// An expired entry is deleted and reported absent. A value stored with a
    /// different type is also reported absent.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let mut entries = self.lock();

        let expired = entries.get(key)?.expires_at < Instant::now();
        if expired {
            entries.remove(key);
            debug!("Cache entry expired: {}", key);
            return None;
        }

        entries
            .get(key)
            .and_then(|entry| Arc::clone(&entry.data).downcast::<T>().ok())
    }

    pub fn set<T: Any + Send + Sync>(
        &self,
        key: impl Into<String>,
        value: T,
        ttl: Duration,
    ) -> Arc<T> {
        let data = Arc::new(value);
        let ttl = ttl.min(Duration::from_secs(MAX_CACHE_TTL_SECS));
        let entry = CacheEntry {
            data: data.clone(),
            expires_at: Instant::now() + ttl,
        };
        self.lock().insert(key.into(), entry);
        data
    }

    /// Returns the cached value, or runs `fetch` and caches its success.
    ///
    /// Errors are passed through and never cached.
    pub async fn get_or_insert_with<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        fetch: F,
    ) -> Result<Arc<T>, E>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.get::<T>(key) {
            debug!("Cache hit for key: {}", key);
            return Ok(hit);
        }

        debug!("Cache miss for key: {}, fetching data...", key);
        let value = fetch().await?;
        Ok(self.set(key, value, ttl))
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let entries = self.lock();

        let valid_entries = entries.values().filter(|e| e.expires_at > now).count();
        CacheStats {
            total_entries: entries.len(),
            valid_entries,
            expired_entries: entries.len() - valid_entries,
        }
    }
}
