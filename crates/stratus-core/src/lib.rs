//! # Stratus Core
//!
//! Core types, traits, and error definitions for Stratus.
//! Every other crate in the workspace builds on the entity, error and
//! health types defined here.

pub mod domain;
pub mod error;
pub mod health;
pub mod id;
pub mod result;
#[cfg(feature = "telemetry")]
pub mod telemetry;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use health::*;
pub use id::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, Component, HasComponent, Interface};
