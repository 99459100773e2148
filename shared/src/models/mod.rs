//! Data models
//!
//! Shared between the admin server and its UI clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (PostgreSQL BIGSERIAL); timestamps are UTC milliseconds.

pub mod brand;
pub mod category;
pub mod customer;
pub mod order;
pub mod product;

// Re-exports
pub use brand::*;
pub use category::*;
pub use customer::*;
pub use order::*;
pub use product::*;
