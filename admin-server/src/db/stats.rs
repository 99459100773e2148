//! Navigation badge counts for the admin UI

use serde::Serialize;
use sqlx::PgPool;

use shared::error::AppResult;
use shared::models::OrderStatus;

/// Counts shown as navigation badges
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub products: i64,
    pub brands: i64,
    pub customers: i64,
    /// Orders currently in the "processing" status
    pub processing_orders: i64,
}

pub async fn summary(pool: &PgPool) -> AppResult<StatsSummary> {
    let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    let brands: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM brands")
        .fetch_one(pool)
        .await?;
    let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;
    let processing_orders: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE status = $1 AND deleted_at IS NULL")
            .bind(OrderStatus::Processing)
            .fetch_one(pool)
            .await?;

    Ok(StatsSummary {
        products,
        brands,
        customers,
        processing_orders,
    })
}
