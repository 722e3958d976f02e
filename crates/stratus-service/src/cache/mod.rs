//! Caching infrastructure for the service layer.
//!
//! [`CacheInterface`] abstracts the key-value store with per-key expiry.
//! [`CacheAside`] holds the read-through and invalidation rules that the
//! user service applies on top of it.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod policy;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::InMemoryCache;
pub use policy::{CacheAside, CacheOrigin, Cached};
pub use redis_cache::{create_redis_pool, RedisCacheService, RedisCacheServiceParameters, STATS_TTL, USERS_TTL};
