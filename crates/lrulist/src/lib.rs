//! # lrulist
//!
//! Fixed-capacity, thread-safe LRU cache.
//!
//! ## Architecture
//! - **Index**: AHash map from key to arena slot (O(1) lookup)
//! - **Ring**: circular doubly-linked list over a slot arena that grows to capacity;
//!   the head is the most recently used entry, its predecessor the eviction
//!   candidate (O(1) promotion and replacement)
//! - **Locking**: one `parking_lot::RwLock`; `set`/`get` are exclusive,
//!   `traverse` is shared
//!
//! Once full, the least recently used slot is reused in place for each new
//! key. An optional eviction callback sees the displaced value first and can
//! veto the insert, in which case nothing changes. `put` hands the displaced
//! entry back to the caller.
//!
//! ```
//! use lrulist::LruList;
//!
//! let cache = LruList::new(2).unwrap();
//! cache.set("a", 1).unwrap();
//! cache.set("b", 2).unwrap();
//! cache.set("c", 3).unwrap(); // evicts "a"
//!
//! assert!(cache.get(&"a").is_err());
//! assert_eq!(cache.get(&"b").unwrap(), 2);
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod ring;
mod stats;

pub use cache::{EvictFn, LruList};
pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use error::{CallbackError, Error, Result};
pub use stats::CacheStats;
