//! Brand Model

use serde::{Deserialize, Serialize};

/// Brand entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Brand {
    pub id: i64,
    pub name: String,
    /// URL-safe identifier, derived from name at creation and immutable
    pub slug: String,
    pub url: Option<String>,
    pub description: Option<String>,
    /// Featured color as a hex string (e.g. "#6528F7")
    pub primary_hex: Option<String>,
    pub is_visible: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create brand payload (slug is derived server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandCreate {
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub primary_hex: Option<String>,
    pub is_visible: Option<bool>,
}

/// Update brand payload
///
/// Deliberately carries no slug field: the stored slug is retained even when
/// the name changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub primary_hex: Option<String>,
    pub is_visible: Option<bool>,
}
