//! Domain entities for Stratus.
//!
//! The user is the only persisted entity; the write models describe what a
//! caller may supply when creating or changing one.

pub mod user;

pub use user::*;
