//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::{Pool, PoolConfig, Runtime, Timeouts};
use redis::AsyncCommands;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use stratus_config::RedisConfig;
use stratus_core::{StratusError, StratusResult};
use tracing::{debug, info};

/// TTL of the `users:all` snapshot (5 minutes).
pub const USERS_TTL: Duration = Duration::from_secs(300);

/// TTL of the `stats` snapshot (1 minute).
pub const STATS_TTL: Duration = Duration::from_secs(60);

/// Redis-based cache service.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Arc<Pool>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> StratusResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| StratusError::Cache(format!("Failed to get Redis connection: {e}")))
    }
}

/// Builds the Redis pool. No connection is opened until first use.
pub fn create_redis_pool(config: &RedisConfig) -> StratusResult<Arc<Pool>> {
    let timeout = Some(config.timeout());
    let mut pool_config = PoolConfig::new(config.pool_size);
    pool_config.timeouts = Timeouts {
        wait: timeout,
        create: timeout,
        recycle: timeout,
    };

    let mut redis_cfg = deadpool_redis::Config::from_url(&config.url);
    redis_cfg.pool = Some(pool_config);

    let pool = redis_cfg
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| StratusError::Cache(format!("Failed to create Redis pool: {e}")))?;

    info!("Redis connection pool configured (max size {})", config.pool_size);
    Ok(Arc::new(pool))
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> StratusResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| StratusError::Cache(format!("Failed to get key '{key}': {e}")))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> StratusResult<()> {
        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| StratusError::Cache(format!("Failed to set key '{key}': {e}")))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StratusResult<bool> {
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| StratusError::Cache(format!("Failed to delete key '{key}': {e}")))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn ping(&self) -> StratusResult<()> {
        let mut conn = self.get_conn().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| StratusError::Cache(format!("Ping failed: {e}")))?;
        Ok(())
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = self.pool.status();
        f.debug_struct("RedisCacheService")
            .field("size", &status.size)
            .field("available", &status.available)
            .finish()
    }
}
