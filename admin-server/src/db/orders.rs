//! Order storage
//!
//! An order and its line items form one consistency boundary: every mutation
//! runs inside a single transaction, so an operation either fully applies or
//! leaves the order unchanged. Mutations of an existing order are guarded by
//! the caller's last-seen `updated_at` (optimistic concurrency).

use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

use crate::orders::{self, money, number};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Order, OrderCreate, OrderDetail, OrderDetailItem, OrderItem, OrderItemAdd,
    OrderItemQuantityUpdate, OrderStatus, OrderStatusChange, OrderSummary, ProductOption,
};
use shared::util::now_millis;

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i64,
    product_id: i64,
    product_name: String,
    quantity: i32,
    unit_price: Decimal,
}

/// Create an order: validates the customer and shipping price, allocates a
/// unique order number, and snapshots the current product price into every
/// initial line item.
pub async fn create(pool: &PgPool, payload: OrderCreate) -> AppResult<OrderDetail> {
    let status = orders::initial_status(&payload)?;

    let mut tx = pool.begin().await?;

    let customer_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
            .bind(payload.customer_id)
            .fetch_one(&mut *tx)
            .await?;
    if !customer_exists {
        return Err(
            AppError::new(ErrorCode::CustomerNotFound).with_detail("id", payload.customer_id)
        );
    }

    let order_number = allocate_number(&mut tx).await?;
    let order_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO orders (number, customer_id, shipping_price, status, notes, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING id
        "#,
    )
    .bind(&order_number)
    .bind(payload.customer_id)
    .bind(payload.shipping_price)
    .bind(status)
    .bind(&payload.notes)
    .bind(now_millis())
    .fetch_one(&mut *tx)
    .await?;

    for item in &payload.items {
        insert_item(&mut tx, order_id, item.product_id, item.quantity).await?;
    }

    tx.commit().await?;
    get(pool, order_id).await
}

/// Add a line item to an existing order, snapshotting the product's current
/// price at this moment.
pub async fn add_item(pool: &PgPool, order_id: i64, payload: OrderItemAdd) -> AppResult<OrderDetail> {
    money::validate_quantity(payload.quantity)?;

    let mut tx = pool.begin().await?;
    touch_guarded(&mut tx, order_id, payload.expected_updated_at).await?;
    insert_item(&mut tx, order_id, payload.product_id, payload.quantity).await?;
    tx.commit().await?;

    get(pool, order_id).await
}

/// Change a line item's quantity. The stored unit price is never revised.
pub async fn update_item_quantity(
    pool: &PgPool,
    order_id: i64,
    item_id: i64,
    payload: OrderItemQuantityUpdate,
) -> AppResult<OrderDetail> {
    money::validate_quantity(payload.quantity)?;

    let mut tx = pool.begin().await?;
    touch_guarded(&mut tx, order_id, payload.expected_updated_at).await?;

    let items = load_items(&mut tx, order_id).await?;
    let item = orders::find_item(&items, item_id)?;

    sqlx::query("UPDATE order_items SET quantity = $2 WHERE id = $1")
        .bind(item.id)
        .bind(payload.quantity)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    get(pool, order_id).await
}

/// Remove a line item from an order. Fails with a not-found error if the
/// item does not belong to this order; the remaining items are unchanged.
pub async fn remove_item(
    pool: &PgPool,
    order_id: i64,
    item_id: i64,
    expected_updated_at: i64,
) -> AppResult<OrderDetail> {
    let mut tx = pool.begin().await?;
    touch_guarded(&mut tx, order_id, expected_updated_at).await?;

    let items = load_items(&mut tx, order_id).await?;
    let item = orders::find_item(&items, item_id)?;

    sqlx::query("DELETE FROM order_items WHERE id = $1")
        .bind(item.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    get(pool, order_id).await
}

/// Set an order's status. Any declared status is reachable from any other.
pub async fn change_status(
    pool: &PgPool,
    order_id: i64,
    payload: OrderStatusChange,
) -> AppResult<OrderDetail> {
    let status: OrderStatus = payload.status.parse()?;

    let mut tx = pool.begin().await?;
    touch_guarded(&mut tx, order_id, payload.expected_updated_at).await?;

    sqlx::query("UPDATE orders SET status = $2 WHERE id = $1")
        .bind(order_id)
        .bind(status)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    get(pool, order_id).await
}

/// Soft-delete an order: the row is marked, never erased.
pub async fn soft_delete(pool: &PgPool, order_id: i64) -> AppResult<()> {
    let now = now_millis();
    let result = sqlx::query(
        "UPDATE orders SET deleted_at = $2, updated_at = $2 \
         WHERE id = $1 AND deleted_at IS NULL",
    )
    .bind(order_id)
    .bind(now)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::OrderNotFound).with_detail("id", order_id));
    }
    Ok(())
}

/// Full order view with line items and computed totals
pub async fn get(pool: &PgPool, order_id: i64) -> AppResult<OrderDetail> {
    let order: Option<Order> = sqlx::query_as(
        "SELECT id, number, customer_id, shipping_price, status, notes, \
                created_at, updated_at, deleted_at \
         FROM orders WHERE id = $1 AND deleted_at IS NULL",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await?;
    let order =
        order.ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("id", order_id))?;

    let customer_name: String = sqlx::query_scalar("SELECT name FROM customers WHERE id = $1")
        .bind(order.customer_id)
        .fetch_one(pool)
        .await?;

    let item_rows: Vec<ItemRow> = sqlx::query_as(
        r#"
        SELECT i.id, i.product_id, p.name AS product_name, i.quantity, i.unit_price
        FROM order_items i
        JOIN products p ON p.id = i.product_id
        WHERE i.order_id = $1
        ORDER BY i.id
        "#,
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;

    let items: Vec<OrderDetailItem> = item_rows
        .into_iter()
        .map(|r| OrderDetailItem {
            line_total: money::line_total(r.quantity, r.unit_price),
            id: r.id,
            product_id: r.product_id,
            product_name: r.product_name,
            quantity: r.quantity,
            unit_price: r.unit_price,
        })
        .collect();

    let line_totals: Vec<Decimal> = items.iter().map(|i| i.line_total).collect();
    let total_price = money::order_total(&line_totals, order.shipping_price);

    Ok(OrderDetail {
        id: order.id,
        number: order.number,
        customer_id: order.customer_id,
        customer_name,
        status: order.status,
        shipping_price: order.shipping_price,
        notes: order.notes,
        items,
        total_price,
        created_at: order.created_at,
        updated_at: order.updated_at,
    })
}

/// Order list with per-row totals; soft-deleted orders excluded
pub async fn list(
    pool: &PgPool,
    status: Option<OrderStatus>,
    search: Option<&str>,
    per_page: i64,
    offset: i64,
) -> AppResult<Vec<OrderSummary>> {
    let summaries: Vec<OrderSummary> = sqlx::query_as(
        r#"
        SELECT o.id, o.number, c.name AS customer_name, o.status, o.shipping_price,
               o.shipping_price + COALESCE(SUM(ROUND(i.quantity * i.unit_price, 2)), 0)
                   AS total_price,
               o.created_at, o.updated_at
        FROM orders o
        JOIN customers c ON c.id = o.customer_id
        LEFT JOIN order_items i ON i.order_id = o.id
        WHERE o.deleted_at IS NULL
          AND ($1::order_status IS NULL OR o.status = $1)
          AND ($2::text IS NULL OR o.number ILIKE '%' || $2 || '%'
               OR c.name ILIKE '%' || $2 || '%')
        GROUP BY o.id, c.name
        ORDER BY o.created_at DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(status)
    .bind(search)
    .bind(per_page)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(summaries)
}

/// Optimistic-concurrency guard: bump `updated_at` iff the caller saw the
/// latest version. The row lock also serializes concurrent editors.
async fn touch_guarded(
    tx: &mut Transaction<'_, Postgres>,
    order_id: i64,
    expected_updated_at: i64,
) -> AppResult<()> {
    let result = sqlx::query(
        "UPDATE orders SET updated_at = $3 \
         WHERE id = $1 AND deleted_at IS NULL AND updated_at = $2",
    )
    .bind(order_id)
    .bind(expected_updated_at)
    .bind(now_millis())
    .execute(&mut **tx)
    .await?;

    if result.rows_affected() == 0 {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM orders WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(order_id)
        .fetch_one(&mut **tx)
        .await?;
        if exists {
            return Err(
                AppError::new(ErrorCode::StaleVersion).with_detail("id", order_id)
            );
        }
        return Err(AppError::new(ErrorCode::OrderNotFound).with_detail("id", order_id));
    }
    Ok(())
}

/// Insert a line item, snapshotting the product's current price
async fn insert_item(
    tx: &mut Transaction<'_, Postgres>,
    order_id: i64,
    product_id: i64,
    quantity: i32,
) -> AppResult<()> {
    let product: Option<ProductOption> =
        sqlx::query_as("SELECT id, name, price FROM products WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&mut **tx)
            .await?;
    let product = product
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", product_id))?;

    let draft = orders::draft_item(&product, quantity)?;
    sqlx::query(
        "INSERT INTO order_items (order_id, product_id, quantity, unit_price) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(order_id)
    .bind(draft.product_id)
    .bind(draft.quantity)
    .bind(draft.unit_price)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn load_items(
    tx: &mut Transaction<'_, Postgres>,
    order_id: i64,
) -> AppResult<Vec<OrderItem>> {
    let items: Vec<OrderItem> = sqlx::query_as(
        "SELECT id, order_id, product_id, quantity, unit_price \
         FROM order_items WHERE order_id = $1 ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(&mut **tx)
    .await?;
    Ok(items)
}

/// Draw order numbers until one is free; bounded redraws, then conflict
async fn allocate_number(tx: &mut Transaction<'_, Postgres>) -> AppResult<String> {
    for _ in 0..number::MAX_ATTEMPTS {
        let candidate = number::draw();
        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM orders WHERE number = $1)")
                .bind(&candidate)
                .fetch_one(&mut **tx)
                .await?;
        if !taken {
            return Ok(candidate);
        }
    }
    Err(AppError::new(ErrorCode::OrderNumberTaken))
}
