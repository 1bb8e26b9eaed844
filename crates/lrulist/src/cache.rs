//! LruList: thread-safe fixed-capacity LRU cache

use std::hash::Hash;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::config::CacheConfig;
use crate::error::{CallbackError, Error, Result};
use crate::ring::Ring;
use crate::stats::CacheStats;

/// Callback invoked with the value about to be displaced by an insert
///
/// Returning an error cancels the insert and leaves the cache untouched.
pub type EvictFn<V> = Box<dyn Fn(&V) -> std::result::Result<(), CallbackError> + Send + Sync>;

/// Fixed-capacity key-value cache with least-recently-used replacement
///
/// All state sits behind one `RwLock`. `set` and `get` take it exclusively
/// (a read still reorders recency); `traverse` and the size accessors share it.
/// The eviction callback runs while the write lock is held, so it must not
/// call back into the same cache.
pub struct LruList<K, V> {
    /// Recency list and key index
    ring: RwLock<Ring<K, V>>,

    /// Optional hook for releasing displaced values
    on_evict: Option<EvictFn<V>>,

    /// Usage counters
    stats: CacheStats,
}

impl<K, V> LruList<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache holding at most `capacity` entries
    ///
    /// # Returns
    /// * `Err(Error::InvalidCapacity)` if `capacity` is zero
    pub fn new(capacity: usize) -> Result<Self> {
        Self::from_config(&CacheConfig::new(capacity), None)
    }

    /// Create a cache that hands each displaced value to `on_evict`
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries
    /// * `on_evict` - Called with the least recently used value before its slot is reused
    pub fn with_evict<F>(capacity: usize, on_evict: F) -> Result<Self>
    where
        F: Fn(&V) -> std::result::Result<(), CallbackError> + Send + Sync + 'static,
    {
        Self::from_config(&CacheConfig::new(capacity), Some(Box::new(on_evict)))
    }

    /// Create a cache from a validated [`CacheConfig`]
    pub fn from_config(config: &CacheConfig, on_evict: Option<EvictFn<V>>) -> Result<Self> {
        config.validate()?;

        debug!(
            capacity = config.capacity,
            evict_callback = on_evict.is_some(),
            "created LRU list"
        );

        Ok(Self {
            ring: RwLock::new(Ring::new(config.capacity)),
            on_evict,
            stats: CacheStats::new(),
        })
    }

    /// Insert or overwrite `key`, making it the most recently used entry
    ///
    /// When the cache is full and `key` is new, the least recently used entry
    /// is passed to the eviction callback and its slot is reused for `key`.
    ///
    /// # Returns
    /// * `Err(Error::EvictionFailed)` if the callback rejects the eviction;
    ///   neither the evicted entry nor the recency order is modified
    pub fn set(&self, key: K, value: V) -> Result<()> {
        self.put(key, value).map(|_| ())
    }

    /// Same as [`set`](Self::set), but hands back the displaced entry
    ///
    /// # Returns
    /// * `Ok(Some((key, value)))` - The evicted entry, now owned by the caller
    /// * `Ok(None)` - Nothing was evicted (update or insert under capacity)
    pub fn put(&self, key: K, value: V) -> Result<Option<(K, V)>> {
        let mut ring = self.ring.write();

        if let Some(idx) = ring.lookup(&key) {
            ring.promote(idx);
            *ring.value_mut(idx) = value;
            self.stats.record_update();
            return Ok(None);
        }

        let evicted = match ring.lru() {
            Some(lru) if ring.is_full() => {
                if let Some(on_evict) = &self.on_evict {
                    if let Err(err) = on_evict(ring.value(lru)) {
                        self.stats.record_eviction_failure();
                        warn!(error = %err, "eviction callback failed, entry kept");
                        return Err(Error::EvictionFailed(err));
                    }
                }

                let displaced = ring.repurpose(lru, key, value);
                self.stats.record_eviction();
                debug!(slot = lru, len = ring.len(), "evicted least recently used entry");
                Some(displaced)
            }
            _ => {
                ring.push_front(key, value);
                None
            }
        };

        self.stats.record_insert();
        Ok(evicted)
    }

    /// Visit every value from most to least recently used
    ///
    /// Recency is not changed. The walk stops at the first error returned by
    /// `visit`, which is propagated as [`Error::VisitAborted`].
    pub fn traverse<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&V) -> std::result::Result<(), CallbackError>,
    {
        let ring = self.ring.read();

        for (position, (_, value)) in ring.iter().enumerate() {
            if let Err(err) = visit(value) {
                trace!(position, error = %err, "traversal aborted");
                return Err(Error::VisitAborted(err));
            }
        }

        Ok(())
    }

    /// Check for `key` without touching recency
    pub fn contains(&self, key: &K) -> bool {
        self.ring.read().contains(key)
    }

    /// Snapshot of resident keys, most recently used first
    pub fn keys(&self) -> Vec<K> {
        self.ring.read().iter().map(|(k, _)| k.clone()).collect()
    }

    /// Number of resident entries
    pub fn len(&self) -> usize {
        self.ring.read().len()
    }

    /// Check if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.ring.read().is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.ring.read().capacity()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl<K, V> LruList<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Look up `key` and mark it as most recently used
    ///
    /// # Returns
    /// * `Err(Error::KeyNotFound)` if absent; the cache is not modified
    pub fn get(&self, key: &K) -> Result<V> {
        let mut ring = self.ring.write();

        match ring.lookup(key) {
            Some(idx) => {
                ring.promote(idx);
                self.stats.record_hit();
                Ok(ring.value(idx).clone())
            }
            None => {
                self.stats.record_miss();
                Err(Error::KeyNotFound)
            }
        }
    }
}
