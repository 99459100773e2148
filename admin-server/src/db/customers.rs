//! Customer storage

use sqlx::PgPool;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Customer, CustomerCreate, CustomerUpdate};
use shared::util::now_millis;

/// Result rows for the order-form customer picker
const SEARCH_LIMIT: i64 = 20;

pub async fn create(pool: &PgPool, payload: CustomerCreate) -> AppResult<Customer> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("name must not be empty"));
    }

    let customer: Option<Customer> = sqlx::query_as(
        r#"
        INSERT INTO customers (name, email, phone, date_of_birth, address, city, zip_code, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        ON CONFLICT (email) DO NOTHING
        RETURNING id, name, email, phone, date_of_birth, address, city, zip_code, created_at, updated_at
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.date_of_birth)
    .bind(&payload.address)
    .bind(&payload.city)
    .bind(&payload.zip_code)
    .bind(now_millis())
    .fetch_optional(pool)
    .await?;

    customer.ok_or_else(|| {
        AppError::new(ErrorCode::CustomerEmailExists).with_detail("email", payload.email.clone())
    })
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Customer> {
    let customer: Option<Customer> = sqlx::query_as(
        "SELECT id, name, email, phone, date_of_birth, address, city, zip_code, created_at, updated_at \
         FROM customers WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    customer.ok_or_else(|| AppError::new(ErrorCode::CustomerNotFound).with_detail("id", id))
}

pub async fn list(
    pool: &PgPool,
    search: Option<&str>,
    per_page: i64,
    offset: i64,
) -> AppResult<Vec<Customer>> {
    let customers: Vec<Customer> = sqlx::query_as(
        r#"
        SELECT id, name, email, phone, date_of_birth, address, city, zip_code, created_at, updated_at
        FROM customers
        WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%' OR email ILIKE '%' || $1 || '%')
        ORDER BY name
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(search)
    .bind(per_page)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(customers)
}

/// Name search for the order form's customer picker
pub async fn search_by_name(pool: &PgPool, query: &str) -> AppResult<Vec<Customer>> {
    let customers: Vec<Customer> = sqlx::query_as(
        r#"
        SELECT id, name, email, phone, date_of_birth, address, city, zip_code, created_at, updated_at
        FROM customers
        WHERE name ILIKE '%' || $1 || '%'
        ORDER BY name
        LIMIT $2
        "#,
    )
    .bind(query)
    .bind(SEARCH_LIMIT)
    .fetch_all(pool)
    .await?;
    Ok(customers)
}

pub async fn update(pool: &PgPool, id: i64, payload: CustomerUpdate) -> AppResult<Customer> {
    // Email moves must not collide with another customer
    if let Some(email) = &payload.email {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1 AND id <> $2)",
        )
        .bind(email)
        .bind(id)
        .fetch_one(pool)
        .await?;
        if taken {
            return Err(
                AppError::new(ErrorCode::CustomerEmailExists).with_detail("email", email.clone())
            );
        }
    }

    let customer: Option<Customer> = sqlx::query_as(
        r#"
        UPDATE customers SET
            name = COALESCE($2, name),
            email = COALESCE($3, email),
            phone = COALESCE($4, phone),
            date_of_birth = COALESCE($5, date_of_birth),
            address = COALESCE($6, address),
            city = COALESCE($7, city),
            zip_code = COALESCE($8, zip_code),
            updated_at = $9
        WHERE id = $1
        RETURNING id, name, email, phone, date_of_birth, address, city, zip_code, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.date_of_birth)
    .bind(&payload.address)
    .bind(&payload.city)
    .bind(&payload.zip_code)
    .bind(now_millis())
    .fetch_optional(pool)
    .await?;

    customer.ok_or_else(|| AppError::new(ErrorCode::CustomerNotFound).with_detail("id", id))
}

/// Delete a customer. Rejected while orders reference them (soft-deleted
/// orders included; the rows still exist).
pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let order_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE customer_id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if order_count > 0 {
        return Err(AppError::new(ErrorCode::CustomerHasOrders).with_detail("orders", order_count));
    }

    let result = sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::CustomerNotFound).with_detail("id", id));
    }
    Ok(())
}
