//! Dependency health reporting.
//!
//! Each dependency is wrapped in a [`HealthCheck`] probe; the probes run
//! concurrently and their results are folded into a [`HealthReport`].

use crate::cache::CacheInterface;
use crate::dto::{HealthChecks, HealthReport};
use async_trait::async_trait;
use shaku::{Component, Interface};
use std::sync::Arc;
use stratus_core::{HealthCheck, ProbeStatus};
use stratus_repository::UserStore;
use tracing::warn;

/// Default service name reported by `/health`.
pub const DEFAULT_SERVICE_NAME: &str = "backend";

/// Health service trait.
#[async_trait]
pub trait HealthService: Interface + Send + Sync {
    /// Probes every dependency. Never fails; failures are reported in the body.
    async fn report(&self) -> HealthReport;
}

/// Probes the relational store with a trivial round trip.
pub struct DatabaseProbe<'a> {
    store: &'a dyn UserStore,
}

impl<'a> DatabaseProbe<'a> {
    #[must_use]
    pub fn new(store: &'a dyn UserStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HealthCheck for DatabaseProbe<'_> {
    fn name(&self) -> &str {
        "database"
    }

    async fn check(&self) -> ProbeStatus {
        ProbeStatus::from_result(self.store.ping().await)
    }
}

/// Probes the cache with a `PING`.
pub struct CacheProbe<'a> {
    cache: &'a dyn CacheInterface,
}

impl<'a> CacheProbe<'a> {
    #[must_use]
    pub fn new(cache: &'a dyn CacheInterface) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl HealthCheck for CacheProbe<'_> {
    fn name(&self) -> &str {
        "redis"
    }

    async fn check(&self) -> ProbeStatus {
        ProbeStatus::from_result(self.cache.ping().await)
    }
}

async fn run_probe(probe: &dyn HealthCheck) -> ProbeStatus {
    let status = probe.check().await;
    if let ProbeStatus::Unhealthy(reason) = &status {
        warn!(probe = probe.name(), reason = %reason, "Health probe failed");
    }
    status
}

/// Health service component.
#[derive(Component)]
#[shaku(interface = HealthService)]
pub struct HealthServiceComponent {
    #[shaku(inject)]
    store: Arc<dyn UserStore>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(default = String::from(DEFAULT_SERVICE_NAME))]
    service_name: String,
}

impl HealthServiceComponent {
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, cache: Arc<dyn CacheInterface>, service_name: impl Into<String>) -> Self {
        Self {
            store,
            cache,
            service_name: service_name.into(),
        }
    }
}

#[async_trait]
impl HealthService for HealthServiceComponent {
    async fn report(&self) -> HealthReport {
        let database = DatabaseProbe::new(self.store.as_ref());
        let redis = CacheProbe::new(self.cache.as_ref());

        let (database, redis) = tokio::join!(run_probe(&database), run_probe(&redis));

        HealthReport::new(self.service_name.clone(), HealthChecks { database, redis })
    }
}

impl std::fmt::Debug for HealthServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthServiceComponent")
            .field("service_name", &self.service_name)
            .finish_non_exhaustive()
    }
}
