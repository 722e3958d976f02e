//! # Stratus Server Library
//!
//! Dependency injection wiring and startup for the Stratus server.

pub mod app;
pub mod di;
pub mod startup;
