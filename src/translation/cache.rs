/*!
 * Translation caching functionality.
 *
 * This module provides a best-effort cache for translation results, backed
 * either by an external key-value store (Redis) or by an in-process map for
 * environments without a cache backend. The cache must never break
 * translation: a missing backend, a failed read or a failed write all
 * degrade to cache misses, and the service simply calls the adapter instead.
 */

use log::{debug, warn};
use parking_lot::RwLock;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Key namespace for all translation entries
const KEY_NAMESPACE: &str = "translation:";

/// Compute the deterministic cache fingerprint for a translation request.
///
/// The fingerprint is a pure function of (text, source-or-"auto", target);
/// identical inputs always map to the same entry.
pub fn fingerprint(text: &str, source_language: Option<&str>, target_language: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update(b":");
    hasher.update(source_language.unwrap_or("auto").as_bytes());
    hasher.update(b":");
    hasher.update(target_language.as_bytes());

    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// An entry of the in-memory backend
#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    expires_at: Instant,
}

/// Storage behind the cache
#[derive(Clone)]
enum CacheBackend {
    /// External key-value store
    Redis(ConnectionManager),
    /// In-process map with passive TTL expiry
    Memory(Arc<RwLock<HashMap<String, MemoryEntry>>>),
}

/// Best-effort translation cache
#[derive(Clone)]
pub struct TranslationCache {
    /// Live backend, or None when the cache is disabled
    backend: Option<CacheBackend>,

    /// Entry time-to-live
    ttl: Duration,

    /// Cache hit counter
    hits: Arc<AtomicUsize>,

    /// Cache miss counter
    misses: Arc<AtomicUsize>,
}

impl TranslationCache {
    /// Connect to the external cache backend.
    ///
    /// With no URL, or when the backend cannot be reached, the returned cache
    /// is a no-op: every get misses and every put is discarded.
    pub async fn connect(url: Option<&str>, ttl: Duration) -> Self {
        let backend = match url {
            Some(url) => match Self::open(url).await {
                Ok(connection) => Some(CacheBackend::Redis(connection)),
                Err(e) => {
                    warn!("Cache backend unavailable ({}), running without cache", e);
                    None
                }
            },
            None => None,
        };

        Self::with_backend(backend, ttl)
    }

    /// Create an in-process cache with no external backend
    pub fn in_memory(ttl: Duration) -> Self {
        Self::with_backend(
            Some(CacheBackend::Memory(Arc::new(RwLock::new(HashMap::new())))),
            ttl,
        )
    }

    /// Create a disabled cache
    pub fn disabled(ttl: Duration) -> Self {
        Self::with_backend(None, ttl)
    }

    fn with_backend(backend: Option<CacheBackend>, ttl: Duration) -> Self {
        Self {
            backend,
            ttl,
            hits: Arc::new(AtomicUsize::new(0)),
            misses: Arc::new(AtomicUsize::new(0)),
        }
    }

    async fn open(url: &str) -> Result<ConnectionManager, redis::RedisError> {
        let client = redis::Client::open(url)?;
        client.get_connection_manager().await
    }

    /// Whether a live backend is behind this cache
    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Configured entry time-to-live, in whole days
    pub fn ttl_days(&self) -> u64 {
        self.ttl.as_secs() / 86_400
    }

    /// Get a serialized translation result from the cache.
    ///
    /// Returns None on a disabled cache, a missing or expired key, or any
    /// backend error.
    pub async fn get(&self, fingerprint: &str) -> Option<String> {
        let key = format!("{}{}", KEY_NAMESPACE, fingerprint);

        let found = match self.backend.as_ref()? {
            CacheBackend::Redis(connection) => {
                let mut connection = connection.clone();
                match connection.get::<_, Option<String>>(&key).await {
                    Ok(value) => value,
                    Err(e) => {
                        warn!("Cache read failed for {}: {}", key, e);
                        None
                    }
                }
            }
            CacheBackend::Memory(map) => {
                let expired = {
                    let map = map.read();
                    match map.get(&key) {
                        Some(entry) if entry.expires_at > Instant::now() => {
                            // Fast path, no write lock needed
                            self.hits.fetch_add(1, Ordering::Relaxed);
                            debug!("Cache hit for {}", key);
                            return Some(entry.value.clone());
                        }
                        Some(_) => true,
                        None => false,
                    }
                };
                if expired {
                    map.write().remove(&key);
                }
                None
            }
        };

        match found {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for {}", key);
                Some(value)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("Cache miss for {}", key);
                None
            }
        }
    }

    /// Store a serialized translation result, best-effort.
    ///
    /// Failures are logged and swallowed; concurrent writers racing on the
    /// same fingerprint write equivalent values, so last-write-wins is safe.
    pub async fn put(&self, fingerprint: &str, value: &str) {
        let Some(backend) = &self.backend else {
            return;
        };

        let key = format!("{}{}", KEY_NAMESPACE, fingerprint);

        match backend {
            CacheBackend::Redis(connection) => {
                let mut connection = connection.clone();
                let result: Result<(), redis::RedisError> =
                    connection.set_ex(&key, value, self.ttl.as_secs()).await;
                match result {
                    Ok(()) => debug!("Cached translation under {}", key),
                    Err(e) => warn!("Cache write failed for {}: {}", key, e),
                }
            }
            CacheBackend::Memory(map) => {
                map.write().insert(
                    key,
                    MemoryEntry {
                        value: value.to_string(),
                        expires_at: Instant::now() + self.ttl,
                    },
                );
            }
        }
    }

    /// Count the entries currently stored under the translation namespace.
    ///
    /// Returns None when the cache is disabled or the backend call fails.
    pub async fn count_entries(&self) -> Option<usize> {
        match self.backend.as_ref()? {
            CacheBackend::Redis(connection) => {
                let mut connection = connection.clone();
                let pattern = format!("{}*", KEY_NAMESPACE);
                match connection.keys::<_, Vec<String>>(&pattern).await {
                    Ok(keys) => Some(keys.len()),
                    Err(e) => {
                        warn!("Cache key scan failed: {}", e);
                        None
                    }
                }
            }
            CacheBackend::Memory(map) => {
                let now = Instant::now();
                Some(map.read().values().filter(|e| e.expires_at > now).count())
            }
        }
    }

    /// Get hit/miss statistics for this cache
    pub fn stats(&self) -> (usize, usize) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
