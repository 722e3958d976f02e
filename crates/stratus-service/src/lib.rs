//! # Stratus Service
//!
//! Business logic service layer for Stratus: the user service, the
//! cache-aside policy wrapped around it, and the dependency health report.

pub mod cache;
pub mod dto;
pub mod health_service;
pub mod r#impl;
pub mod user_service;

#[cfg(test)]
mod test_support;

pub use cache::*;
pub use dto::*;
pub use health_service::*;
pub use r#impl::{UserServiceComponent, UserServiceComponentParameters};
pub use user_service::*;
