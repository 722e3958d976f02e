//! The cache abstraction shared by Redis and the in-process map.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use shaku::Interface;
use std::time::Duration;
use stratus_core::{StratusError, StratusResult};

/// Key-value cache with per-key expiry.
///
/// Values are opaque strings (JSON in practice). Implemented by Redis and by
/// a process-local map.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> StratusResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> StratusResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> StratusResult<bool>;

    /// Checks that the cache is reachable.
    async fn ping(&self) -> StratusResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Typed JSON helpers over [`CacheInterface`].
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Reads `key` and decodes it as `T`. A payload that does not decode is an error.
    async fn get_json<T: DeserializeOwned + Send>(&self, key: &str) -> StratusResult<Option<T>> {
        self.get_raw(key)
            .await?
            .map(|raw| serde_json::from_str(&raw).map_err(StratusError::from))
            .transpose()
    }

    /// Encodes `value` and stores it under `key` for `ttl`.
    async fn put_json<T: Serialize + Send + Sync>(&self, key: &str, value: &T, ttl: Duration) -> StratusResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw, ttl).await
    }
}

impl<C: CacheInterface + ?Sized> CacheExt for C {}
