//! PostgreSQL persistence
//!
//! One module per aggregate. All functions take `&PgPool`, return
//! [`shared::error::AppResult`], and keep multi-row mutations inside a
//! single transaction.

pub mod brands;
pub mod categories;
pub mod customers;
pub mod orders;
pub mod products;
pub mod stats;
