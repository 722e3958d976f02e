//! User service implementation.

use crate::cache::{cache_keys, CacheAside, CacheInterface, Cached, STATS_TTL, USERS_TTL};
use crate::dto::{CreateUserRequest, StatsResponse, UpdateUserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use stratus_core::{StratusError, StratusResult, UserChanges, UserId, ValidateExt};
use stratus_repository::UserStore;
use tracing::{debug, info};

/// Window counted by `recent_users`.
const RECENT_WINDOW_DAYS: i64 = 7;

/// User service backed by a [`UserStore`] with a cache-aside layer.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    store: Arc<dyn UserStore>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(default = USERS_TTL)]
    users_ttl: Duration,
    #[shaku(default = STATS_TTL)]
    stats_ttl: Duration,
}

impl UserServiceComponent {
    /// Creates a service with the default TTLs.
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, cache: Arc<dyn CacheInterface>) -> Self {
        Self::with_ttls(store, cache, USERS_TTL, STATS_TTL)
    }

    /// Creates a service with explicit TTLs for the user list and the stats.
    #[must_use]
    pub fn with_ttls(
        store: Arc<dyn UserStore>,
        cache: Arc<dyn CacheInterface>,
        users_ttl: Duration,
        stats_ttl: Duration,
    ) -> Self {
        Self {
            store,
            cache,
            users_ttl,
            stats_ttl,
        }
    }

    fn policy(&self) -> CacheAside<'_> {
        CacheAside::new(self.cache.as_ref())
    }

    async fn load_all_users(&self) -> StratusResult<Vec<UserResponse>> {
        let users = self.store.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn compute_stats(&self) -> StratusResult<StatsResponse> {
        let now = Utc::now();
        let since = now - ChronoDuration::days(RECENT_WINDOW_DAYS);

        let total_users = self.store.count().await?;
        let recent_users = self.store.count_created_since(since).await?;

        Ok(StatsResponse {
            total_users,
            recent_users,
            timestamp: now,
            cache_hits: self.read_hit_counter().await,
        })
    }

    /// Reads `cache:hits`, treating absent, unparsable or unreadable as zero.
    async fn read_hit_counter(&self) -> u64 {
        match self.cache.get_raw(cache_keys::CACHE_HITS).await {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or(0),
            Ok(None) => 0,
            Err(e) => {
                debug!("Could not read hit counter: {}", e);
                0
            }
        }
    }
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn create_user(&self, request: CreateUserRequest) -> StratusResult<UserResponse> {
        debug!("Creating user: {}", request.username);

        request.validate_request()?;

        let user = self.store.create(request.into()).await?;
        self.policy().invalidate(cache_keys::USERS_ALL).await;

        info!("User created: {}", user.id);
        Ok(UserResponse::from(user))
    }

    async fn get_user(&self, id: UserId) -> StratusResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| StratusError::not_found("User", id))?;

        Ok(UserResponse::from(user))
    }

    async fn list_users(&self) -> StratusResult<Cached<Vec<UserResponse>>> {
        self.policy()
            .read_through(cache_keys::USERS_ALL, self.users_ttl, || self.load_all_users())
            .await
    }

    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> StratusResult<UserResponse> {
        debug!("Updating user: {}", id);

        request.validate_request()?;
        let changes = UserChanges::from(request);
        if changes.is_empty() {
            return Err(StratusError::validation(
                "At least one of username or email must be provided",
            ));
        }

        let user = self
            .store
            .update(id, changes)
            .await?
            .ok_or_else(|| StratusError::not_found("User", id))?;
        self.policy().invalidate(cache_keys::USERS_ALL).await;

        info!("User updated: {}", id);
        Ok(UserResponse::from(user))
    }

    async fn delete_user(&self, id: UserId) -> StratusResult<UserResponse> {
        debug!("Deleting user: {}", id);

        let user = self
            .store
            .delete(id)
            .await?
            .ok_or_else(|| StratusError::not_found("User", id))?;
        self.policy().invalidate(cache_keys::USERS_ALL).await;

        info!("User deleted: {}", id);
        Ok(UserResponse::from(user))
    }

    async fn get_stats(&self) -> StratusResult<StatsResponse> {
        let cached = self
            .policy()
            .read_through(cache_keys::STATS, self.stats_ttl, || self.compute_stats())
            .await?;
        Ok(cached.into_inner())
    }
}

impl std::fmt::Debug for UserServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceComponent")
            .field("users_ttl", &self.users_ttl)
            .field("stats_ttl", &self.stats_ttl)
            .finish_non_exhaustive()
    }
}
