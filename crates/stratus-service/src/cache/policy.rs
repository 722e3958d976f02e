//! Cache-aside consistency policy.
//!
//! Reads go through the cache: a hit is served as is, a miss is computed
//! from the store and written back with a TTL. Writes go to the store first
//! and then invalidate the affected key. The cache is best-effort on both
//! paths: its failures are logged and never fail the caller.
//!
//! A reader that computed a snapshot before a concurrent write may store it
//! after that write's invalidation. The stale entry lives at most one TTL.

use super::{CacheExt, CacheInterface};
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::time::Duration;
use stratus_core::StratusResult;
use tracing::{debug, warn};

/// Where a read-through value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOrigin {
    /// Served from a live cache entry.
    Cache,
    /// Computed from the store on a miss.
    Store,
}

/// A value tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cached<T> {
    pub value: T,
    pub origin: CacheOrigin,
}

impl<T> Cached<T> {
    /// Returns true if the value was served from the cache.
    #[must_use]
    pub fn is_from_cache(&self) -> bool {
        self.origin == CacheOrigin::Cache
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Read-through and invalidation rules over a [`CacheInterface`].
#[derive(Clone, Copy)]
pub struct CacheAside<'a> {
    cache: &'a dyn CacheInterface,
}

impl<'a> CacheAside<'a> {
    #[must_use]
    pub fn new(cache: &'a dyn CacheInterface) -> Self {
        Self { cache }
    }

    /// Returns the cached value for `key`, or computes, stores and returns it.
    ///
    /// Only a `compute` error fails the call.
    pub async fn read_through<T, F, Fut>(&self, key: &str, ttl: Duration, compute: F) -> StratusResult<Cached<T>>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = StratusResult<T>> + Send,
    {
        match self.cache.get_json::<T>(key).await {
            Ok(Some(value)) => {
                debug!(key, "Serving from cache");
                return Ok(Cached {
                    value,
                    origin: CacheOrigin::Cache,
                });
            }
            Ok(None) => debug!(key, "Cache miss, computing from store"),
            Err(e) => warn!(key, error = %e, "Cache read failed, computing from store"),
        }

        let value = compute().await?;

        if let Err(e) = self.cache.put_json(key, &value, ttl).await {
            warn!(key, error = %e, "Failed to populate cache");
        }

        Ok(Cached {
            value,
            origin: CacheOrigin::Store,
        })
    }

    /// Removes `key` so the next read recomputes it.
    pub async fn invalidate(&self, key: &str) {
        match self.cache.delete(key).await {
            Ok(existed) => debug!(key, existed, "Invalidated cache key"),
            Err(e) => warn!(key, error = %e, "Failed to invalidate cache key"),
        }
    }
}

impl std::fmt::Debug for CacheAside<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheAside")
            .field("enabled", &self.cache.is_enabled())
            .finish()
    }
}
