//! Category storage

use sqlx::PgPool;

use crate::catalog::slug::slugify;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::util::now_millis;

/// Create a category. The slug is derived from the name exactly once, here.
pub async fn create(pool: &PgPool, payload: CategoryCreate) -> AppResult<Category> {
    let slug = slugify(&payload.name);
    if slug.is_empty() {
        return Err(AppError::validation(
            "name must contain at least one alphanumeric character",
        ));
    }

    let category: Option<Category> = sqlx::query_as(
        r#"
        INSERT INTO categories (name, slug, description, is_visible, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        ON CONFLICT (slug) DO NOTHING
        RETURNING id, name, slug, description, is_visible, created_at, updated_at
        "#,
    )
    .bind(&payload.name)
    .bind(&slug)
    .bind(&payload.description)
    .bind(payload.is_visible.unwrap_or(true))
    .bind(now_millis())
    .fetch_optional(pool)
    .await?;

    category.ok_or_else(|| AppError::new(ErrorCode::SlugTaken).with_detail("slug", slug))
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Category> {
    let category: Option<Category> = sqlx::query_as(
        "SELECT id, name, slug, description, is_visible, created_at, updated_at \
         FROM categories WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    category.ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id))
}

pub async fn list(
    pool: &PgPool,
    search: Option<&str>,
    per_page: i64,
    offset: i64,
) -> AppResult<Vec<Category>> {
    let categories: Vec<Category> = sqlx::query_as(
        r#"
        SELECT id, name, slug, description, is_visible, created_at, updated_at
        FROM categories
        WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
        ORDER BY name
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(search)
    .bind(per_page)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

/// Update a category. The stored slug is retained even when the name changes.
pub async fn update(pool: &PgPool, id: i64, payload: CategoryUpdate) -> AppResult<Category> {
    let category: Option<Category> = sqlx::query_as(
        r#"
        UPDATE categories SET
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            is_visible = COALESCE($4, is_visible),
            updated_at = $5
        WHERE id = $1
        RETURNING id, name, slug, description, is_visible, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.is_visible)
    .bind(now_millis())
    .fetch_optional(pool)
    .await?;

    category.ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id))
}

/// Delete a category. Rejected while products still reference it.
pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let product_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM category_product WHERE category_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if product_count > 0 {
        return Err(
            AppError::new(ErrorCode::CategoryHasProducts).with_detail("products", product_count)
        );
    }

    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id));
    }
    Ok(())
}
