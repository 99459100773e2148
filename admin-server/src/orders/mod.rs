//! Order aggregate domain logic
//!
//! Pure functions over the order snapshot: input validation, price
//! snapshotting, and line-item lookup. Persistence lives in
//! [`crate::db::orders`]; monetary arithmetic in [`money`]; order number
//! generation in [`number`].

pub mod money;
pub mod number;

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OrderCreate, OrderItem, OrderStatus, ProductOption};

/// A new line item with the product's price snapshotted at selection time.
///
/// The unit price is fixed at the moment the draft is taken; later changes
/// to the product's price do not affect it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Snapshot a product's current price into a line item draft
pub fn draft_item(product: &ProductOption, quantity: i32) -> AppResult<ItemDraft> {
    money::validate_quantity(quantity)?;
    Ok(ItemDraft {
        product_id: product.id,
        quantity,
        unit_price: product.price,
    })
}

/// Validate a create-order payload and resolve its initial status
pub fn initial_status(payload: &OrderCreate) -> AppResult<OrderStatus> {
    money::validate_shipping_price(payload.shipping_price)?;
    match payload.status.as_deref() {
        Some(s) => s.parse(),
        None => Ok(OrderStatus::Pending),
    }
}

/// Find a line item by id among its parent order's items
pub fn find_item(items: &[OrderItem], item_id: i64) -> AppResult<&OrderItem> {
    items
        .iter()
        .find(|i| i.id == item_id)
        .ok_or_else(|| AppError::new(ErrorCode::OrderItemNotFound).with_detail("item_id", item_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn product(id: i64, price: &str) -> ProductOption {
        ProductOption {
            id,
            name: format!("Product {id}"),
            price: dec(price),
        }
    }

    fn item(id: i64, quantity: i32, unit_price: &str) -> OrderItem {
        OrderItem {
            id,
            order_id: 1,
            product_id: 100 + id,
            quantity,
            unit_price: dec(unit_price),
        }
    }

    #[test]
    fn test_draft_item_snapshots_price() {
        let p = product(7, "19.90");
        let draft = draft_item(&p, 2).unwrap();
        assert_eq!(draft.product_id, 7);
        assert_eq!(draft.quantity, 2);
        assert_eq!(draft.unit_price, dec("19.90"));
    }

    #[test]
    fn test_snapshot_survives_product_price_change() {
        let mut p = product(7, "19.90");
        let draft = draft_item(&p, 1).unwrap();

        // the product's price moves after the item was added
        p.price = dec("24.90");

        assert_eq!(draft.unit_price, dec("19.90"));
        assert_eq!(money::line_total(draft.quantity, draft.unit_price), dec("19.90"));
    }

    #[test]
    fn test_draft_item_rejects_non_positive_quantity() {
        let p = product(1, "5.00");
        assert_eq!(
            draft_item(&p, 0).unwrap_err().code,
            ErrorCode::InvalidQuantity
        );
        assert_eq!(
            draft_item(&p, -2).unwrap_err().code,
            ErrorCode::InvalidQuantity
        );
    }

    fn create_payload(shipping: &str, status: Option<&str>) -> OrderCreate {
        OrderCreate {
            customer_id: 1,
            shipping_price: dec(shipping),
            status: status.map(str::to_string),
            notes: None,
            items: vec![],
        }
    }

    #[test]
    fn test_initial_status_defaults_to_pending() {
        let status = initial_status(&create_payload("5.00", None)).unwrap();
        assert_eq!(status, OrderStatus::Pending);
    }

    #[test]
    fn test_initial_status_parses_declared_values() {
        let status = initial_status(&create_payload("0", Some("processing"))).unwrap();
        assert_eq!(status, OrderStatus::Processing);
    }

    #[test]
    fn test_initial_status_rejects_undeclared_value() {
        let err = initial_status(&create_payload("5.00", Some("shipped"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatus);
    }

    #[test]
    fn test_initial_status_rejects_negative_shipping() {
        let err = initial_status(&create_payload("-5.00", None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAmount);
    }

    #[test]
    fn test_find_item() {
        let items = vec![item(1, 2, "10.00"), item(2, 1, "3.50")];
        let found = find_item(&items, 2).unwrap();
        assert_eq!(found.unit_price, dec("3.50"));
    }

    #[test]
    fn test_find_missing_item_leaves_order_unchanged() {
        let items = vec![item(1, 2, "10.00"), item(2, 1, "3.50")];
        let before: Vec<Decimal> = items
            .iter()
            .map(|i| money::line_total(i.quantity, i.unit_price))
            .collect();
        let total_before = money::order_total(&before, dec("5.00"));

        let err = find_item(&items, 99).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderItemNotFound);

        // remaining items and total are untouched by the failed lookup
        let after: Vec<Decimal> = items
            .iter()
            .map(|i| money::line_total(i.quantity, i.unit_price))
            .collect();
        assert_eq!(before, after);
        assert_eq!(money::order_total(&after, dec("5.00")), total_before);
        assert_eq!(total_before, dec("28.50"));
    }
}
