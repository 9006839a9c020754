//! # Result Cache
//!
//! Memoizes engine output per exact path string. Keys are not normalized:
//! `/SQ01/` and `/sq01/` get independent entries even though they match the
//! same way.
//!
//! Concurrent misses on the same key may compute twice. Matching is pure, so
//! both writers store identical values and the race is harmless.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::SeqShot;

/// Snapshot of cache usage counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of distinct paths stored.
    pub entries: usize,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to run the engine.
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, `0.0` when unused.
    #[must_use]
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Thread-safe memo table from path to [`SeqShot`].
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: RwLock<HashMap<String, SeqShot>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResultCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache pre-sized for `capacity` distinct paths.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            ..Self::default()
        }
    }

    /// Returns the stored result for `path`, or runs `compute`, stores its
    /// output and returns it.
    pub fn get_or_compute<F>(&self, path: &str, compute: F) -> SeqShot
    where
        F: FnOnce(&str) -> SeqShot,
    {
        if let Some(hit) = self.read().get(path) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(path, "cache hit");
            return hit.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        trace!(path, "cache miss");

        let result = compute(path);
        self.write().insert(path.to_owned(), result.clone());
        result
    }

    /// Stored result for `path`, without computing on a miss.
    pub fn get(&self, path: &str) -> Option<SeqShot> {
        self.read().get(path).cloned()
    }

    /// Drops every entry and resets the counters. Returns how many entries
    /// were removed.
    pub fn clear(&self) -> usize {
        let mut entries = self.write();
        let removed = entries.len();
        entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        removed
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    // Entries are always recomputable, so a panic in another holder of the
    // lock leaves nothing worth refusing access over.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, SeqShot>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, SeqShot>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
