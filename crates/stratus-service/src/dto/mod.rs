//! Data Transfer Objects (DTOs).

mod health_dto;
mod stats_dto;
mod user_dto;

pub use health_dto::*;
pub use stats_dto::*;
pub use user_dto::*;
