//! Application state for Axum handlers.

use shaku::{HasComponent, Module};
use std::sync::Arc;
use stratus_service::{HealthService, UserService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub health_service: Arc<dyn HealthService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(user_service: Arc<dyn UserService>, health_service: Arc<dyn HealthService>) -> Self {
        Self {
            user_service,
            health_service,
        }
    }

    /// Resolves the services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn UserService> + HasComponent<dyn HealthService>,
    {
        Self::new(module.resolve(), module.resolve())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
