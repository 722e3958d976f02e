//! Dependency injection module using Shaku.
//!
//! One module holds every component of the process. When Redis is disabled
//! the cache component is overridden with the in-process [`InMemoryCache`].

use deadpool_redis::Pool;
use sqlx::PgPool;
use std::sync::Arc;
use stratus_config::AppConfig;
use stratus_core::{module, HasComponent};
use stratus_repository::{DatabasePool, DatabasePoolInterface, DatabasePoolParameters, PgUserStore};
use stratus_service::{
    CacheInterface, HealthService, HealthServiceComponent, HealthServiceComponentParameters, InMemoryCache,
    RedisCacheService, RedisCacheServiceParameters, UserService, UserServiceComponent,
    UserServiceComponentParameters,
};
use tracing::info;

module! {
    pub AppModule {
        components = [
            DatabasePool,
            PgUserStore,
            RedisCacheService,
            UserServiceComponent,
            HealthServiceComponent,
        ],
        providers = [],
    }
}

/// Assembles the module from already created connection pools.
///
/// `redis_pool` is `None` when Redis is disabled, in which case an
/// [`InMemoryCache`] stands in for it.
#[must_use]
pub fn build_app_module(config: &AppConfig, db_pool: PgPool, redis_pool: Option<Arc<Pool>>) -> Arc<AppModule> {
    let mut builder = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool: db_pool })
        .with_component_parameters::<UserServiceComponent>(UserServiceComponentParameters {
            users_ttl: config.cache.users_ttl(),
            stats_ttl: config.cache.stats_ttl(),
        })
        .with_component_parameters::<HealthServiceComponent>(HealthServiceComponentParameters {
            service_name: config.app.service_name.clone(),
        });

    builder = match redis_pool {
        Some(pool) => builder.with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters { pool }),
        None => {
            info!("Redis disabled, using in-process cache");
            builder.with_component_override::<dyn CacheInterface>(Box::new(InMemoryCache::new()))
        }
    };

    Arc::new(builder.build())
}

/// Trait for resolving the services from the module.
pub trait ServiceResolver {
    /// Resolves the user service from the module.
    fn user_service(&self) -> Arc<dyn UserService>;

    /// Resolves the health service from the module.
    fn health_service(&self) -> Arc<dyn HealthService>;
}

impl ServiceResolver for AppModule {
    fn user_service(&self) -> Arc<dyn UserService> {
        self.resolve()
    }

    fn health_service(&self) -> Arc<dyn HealthService> {
        self.resolve()
    }
}

/// Trait for resolving the infrastructure components.
pub trait InfrastructureResolver {
    /// Resolves the database pool from the module.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;

    /// Resolves the cache from the module.
    fn cache(&self) -> Arc<dyn CacheInterface>;
}

impl InfrastructureResolver for AppModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}
