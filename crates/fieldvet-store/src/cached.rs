//! TTL cache decorator for uniqueness stores.

use std::time::Duration;

use fieldvet_core::UniquenessStore;
use moka::sync::Cache;
use tracing::trace;

/// Caches lookups against a slower backing store.
///
/// Both hits and misses are cached for the TTL, so a newly accepted
/// submission may go undetected as a duplicate until the miss entry
/// expires. That window is the accepted tradeoff: duplicate detection here
/// is a quality gate, not an integrity constraint.
pub struct CachedStore<S> {
    inner: S,
    cache: Cache<String, bool>,
}

impl<S: UniquenessStore> CachedStore<S> {
    /// Wrap a store with a cache of `max_entries` lookups expiring after
    /// `ttl`.
    pub fn new(inner: S, max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();

        Self { inner, cache }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drop every cached lookup, e.g. after bulk-loading the backing
    /// store.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Drop one cached lookup.
    pub fn invalidate(&self, normalized: &str) {
        self.cache.invalidate(normalized);
    }
}

impl<S: UniquenessStore> UniquenessStore for CachedStore<S> {
    fn contains(&self, normalized: &str) -> bool {
        if let Some(hit) = self.cache.get(normalized) {
            trace!(%normalized, cached = hit, "uniqueness lookup served from cache");
            return hit;
        }

        let present = self.inner.contains(normalized);
        self.cache.insert(normalized.to_string(), present);
        present
    }
}
