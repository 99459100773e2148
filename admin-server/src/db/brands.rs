//! Brand storage

use sqlx::PgPool;

use crate::catalog::slug::slugify;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Brand, BrandCreate, BrandUpdate};
use shared::util::now_millis;

/// Create a brand. The slug is derived from the name exactly once, here.
pub async fn create(pool: &PgPool, payload: BrandCreate) -> AppResult<Brand> {
    let slug = slugify(&payload.name);
    if slug.is_empty() {
        return Err(AppError::validation(
            "name must contain at least one alphanumeric character",
        ));
    }

    let brand: Option<Brand> = sqlx::query_as(
        r#"
        INSERT INTO brands (name, slug, url, description, primary_hex, is_visible, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        ON CONFLICT (slug) DO NOTHING
        RETURNING id, name, slug, url, description, primary_hex, is_visible, created_at, updated_at
        "#,
    )
    .bind(&payload.name)
    .bind(&slug)
    .bind(&payload.url)
    .bind(&payload.description)
    .bind(&payload.primary_hex)
    .bind(payload.is_visible.unwrap_or(true))
    .bind(now_millis())
    .fetch_optional(pool)
    .await?;

    brand.ok_or_else(|| AppError::new(ErrorCode::SlugTaken).with_detail("slug", slug))
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Brand> {
    let brand: Option<Brand> = sqlx::query_as(
        "SELECT id, name, slug, url, description, primary_hex, is_visible, created_at, updated_at \
         FROM brands WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    brand.ok_or_else(|| AppError::new(ErrorCode::BrandNotFound).with_detail("id", id))
}

pub async fn list(
    pool: &PgPool,
    search: Option<&str>,
    per_page: i64,
    offset: i64,
) -> AppResult<Vec<Brand>> {
    let brands: Vec<Brand> = sqlx::query_as(
        r#"
        SELECT id, name, slug, url, description, primary_hex, is_visible, created_at, updated_at
        FROM brands
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
    Ok(brands)
}

/// Update a brand. The stored slug is retained even when the name changes.
pub async fn update(pool: &PgPool, id: i64, payload: BrandUpdate) -> AppResult<Brand> {
    let brand: Option<Brand> = sqlx::query_as(
        r#"
        UPDATE brands SET
            name = COALESCE($2, name),
            url = COALESCE($3, url),
            description = COALESCE($4, description),
            primary_hex = COALESCE($5, primary_hex),
            is_visible = COALESCE($6, is_visible),
            updated_at = $7
        WHERE id = $1
        RETURNING id, name, slug, url, description, primary_hex, is_visible, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&payload.name)
    .bind(&payload.url)
    .bind(&payload.description)
    .bind(&payload.primary_hex)
    .bind(payload.is_visible)
    .bind(now_millis())
    .fetch_optional(pool)
    .await?;

    brand.ok_or_else(|| AppError::new(ErrorCode::BrandNotFound).with_detail("id", id))
}

/// Delete a brand. Rejected while products still reference it.
pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let product_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE brand_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if product_count > 0 {
        return Err(
            AppError::new(ErrorCode::BrandHasProducts).with_detail("products", product_count)
        );
    }

    let result = sqlx::query("DELETE FROM brands WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::BrandNotFound).with_detail("id", id));
    }
    Ok(())
}
