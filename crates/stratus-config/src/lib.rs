//! # Stratus Config
//!
//! Configuration management for Stratus.
//! Supports layered configuration from files, `STRATUS__` environment
//! variables and the conventional `DATABASE_URL`/`REDIS_URL`/`PORT` style
//! variables used by container deployments.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
