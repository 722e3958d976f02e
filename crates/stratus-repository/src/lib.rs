//! # Stratus Repository
//!
//! The entity store for users:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserStore>
//! PgUserStore                   (PostgreSQL / SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! PostgreSQL
//! ```
//!
//! [`InMemoryUserStore`] implements the same trait without a database and
//! is used by tests and local runs.

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod traits;

pub use memory::InMemoryUserStore;
pub use pool::*;
pub use postgres::*;
pub use traits::*;
