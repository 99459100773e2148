//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product fulfillment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(
    feature = "db",
    derive(sqlx::Type),
    sqlx(type_name = "product_type", rename_all = "lowercase")
)]
pub enum ProductType {
    Downloadable,
    Deliverable,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Downloadable => "downloadable",
            Self::Deliverable => "deliverable",
        }
    }
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// URL-safe identifier, derived from name at creation and immutable
    pub slug: String,
    pub description: Option<String>,
    pub sku: String,
    /// Currency amount, at most 6 integer digits and 2 fraction digits
    pub price: Decimal,
    /// Stock on hand (0-100)
    pub quantity: i32,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub product_type: ProductType,
    pub is_visible: bool,
    pub is_featured: bool,
    /// ISO date string (YYYY-MM-DD)
    pub published_at: Option<String>,
    /// Opaque image path/URL reference
    pub image: Option<String>,
    pub brand_id: i64,

    // -- Relations (populated by application code, skipped by FromRow) --
    /// Category IDs (junction table)
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub category_ids: Vec<i64>,

    pub created_at: i64,
    pub updated_at: i64,
}

/// Create product payload (slug is derived server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    pub price: Decimal,
    pub quantity: Option<i32>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub is_visible: Option<bool>,
    pub is_featured: Option<bool>,
    pub published_at: Option<String>,
    pub image: Option<String>,
    pub brand_id: i64,
    #[serde(default)]
    pub category_ids: Vec<i64>,
}

/// Update product payload (no slug field; slugs are write-once)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    pub is_visible: Option<bool>,
    pub is_featured: Option<bool>,
    pub published_at: Option<String>,
    pub image: Option<String>,
    pub brand_id: Option<i64>,
    pub category_ids: Option<Vec<i64>>,
}

/// (id, name, price) triple for the order form's product picker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductOption {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_serde() {
        assert_eq!(
            serde_json::to_string(&ProductType::Downloadable).unwrap(),
            "\"downloadable\""
        );
        let t: ProductType = serde_json::from_str("\"deliverable\"").unwrap();
        assert_eq!(t, ProductType::Deliverable);
    }

    #[test]
    fn test_product_type_as_str() {
        assert_eq!(ProductType::Downloadable.as_str(), "downloadable");
        assert_eq!(ProductType::Deliverable.as_str(), "deliverable");
    }

    #[test]
    fn test_product_create_parses_type_field() {
        let json = serde_json::json!({
            "name": "Air Max",
            "sku": "AM-90",
            "price": 129.99,
            "type": "deliverable",
            "brand_id": 1
        });
        let create: ProductCreate = serde_json::from_value(json).unwrap();
        assert_eq!(create.product_type, ProductType::Deliverable);
        assert!(create.category_ids.is_empty());
    }
}
