//! Order Model

use crate::error::{AppError, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status
///
/// Any declared status is settable from any other; there is no enforced
/// transition ordering. Undeclared values are rejected at parse time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(
    feature = "db",
    derive(sqlx::Type),
    sqlx(type_name = "order_status", rename_all = "lowercase")
)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Declined,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Declined => "declined",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "declined" => Ok(Self::Declined),
            other => Err(AppError::new(ErrorCode::InvalidStatus).with_detail("status", other)),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line item
///
/// `unit_price` is a snapshot of the product's price at the moment the item
/// was added. Later product price changes never touch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    /// System-generated identifier ("OR-" + numeric suffix), immutable
    pub number: String,
    pub customer_id: i64,
    pub shipping_price: Decimal,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub created_at: i64,
    /// Doubles as the optimistic-concurrency token for order mutations
    pub updated_at: i64,
    /// Soft-delete marker; null while the order is live
    pub deleted_at: Option<i64>,

    // -- Relations (populated by application code, skipped by FromRow) --
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

fn default_quantity() -> i32 {
    1
}

/// Line item within a create-order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub product_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

/// Create order payload (number is generated server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: i64,
    pub shipping_price: Decimal,
    /// Initial status; defaults to "pending"
    pub status: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItemCreate>,
}

/// Add a line item to an existing order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemAdd {
    pub product_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    /// Caller's last-seen `updated_at` of the parent order
    pub expected_updated_at: i64,
}

/// Change a line item's quantity (unit price is never revised)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemQuantityUpdate {
    pub quantity: i32,
    pub expected_updated_at: i64,
}

/// Remove a line item from an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRemove {
    pub expected_updated_at: i64,
}

/// Change an order's status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusChange {
    pub status: String,
    pub expected_updated_at: i64,
}

/// Order list row (admin table view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderSummary {
    pub id: i64,
    pub number: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub shipping_price: Decimal,
    /// Sum of line totals plus shipping price
    pub total_price: Decimal,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Line item within an order detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetailItem {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Full order view with line items and computed total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: i64,
    pub number: String,
    pub customer_id: i64,
    pub customer_name: String,
    pub status: OrderStatus,
    pub shipping_price: Decimal,
    pub notes: Option<String>,
    pub items: Vec<OrderDetailItem>,
    pub total_price: Decimal,
    pub created_at: i64,
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            OrderStatus::from_str("pending").unwrap(),
            OrderStatus::Pending
        );
        assert_eq!(
            OrderStatus::from_str("processing").unwrap(),
            OrderStatus::Processing
        );
        assert_eq!(
            OrderStatus::from_str("completed").unwrap(),
            OrderStatus::Completed
        );
        assert_eq!(
            OrderStatus::from_str("declined").unwrap(),
            OrderStatus::Declined
        );
    }

    #[test]
    fn test_status_parse_rejects_undeclared() {
        let err = OrderStatus::from_str("shipped").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatus);
    }

    #[test]
    fn test_status_serde_roundtrip() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let status: OrderStatus = serde_json::from_str("\"declined\"").unwrap();
        assert_eq!(status, OrderStatus::Declined);
    }

    #[test]
    fn test_item_quantity_defaults_to_one() {
        let json = serde_json::json!({ "product_id": 7 });
        let item: OrderItemCreate = serde_json::from_value(json).unwrap();
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_order_create_items_default_empty() {
        let json = serde_json::json!({
            "customer_id": 1,
            "shipping_price": 5.0
        });
        let create: OrderCreate = serde_json::from_value(json).unwrap();
        assert!(create.items.is_empty());
        assert!(create.status.is_none());
    }
}
