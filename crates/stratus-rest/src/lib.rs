//! # Stratus REST
//!
//! REST API layer using Axum for Stratus.
//! Provides HTTP endpoints for user management, statistics and health.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
