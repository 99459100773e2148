//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// URL-safe identifier, derived from name at creation and immutable
    pub slug: String,
    pub description: Option<String>,
    pub is_visible: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create category payload (slug is derived server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub description: Option<String>,
    pub is_visible: Option<bool>,
}

/// Update category payload (no slug field; slugs are write-once)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_visible: Option<bool>,
}
