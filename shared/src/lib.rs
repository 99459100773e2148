//! Shared types for the storefront admin
//!
//! Common types used by the admin server and its clients: data models,
//! error types, and the unified API response envelope.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
