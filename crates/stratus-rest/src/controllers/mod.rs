//! REST API controllers.

pub mod health_controller;
pub mod stats_controller;
pub mod user_controller;
