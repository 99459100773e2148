//! Product storage
//!
//! Products reference one brand and many categories; the category links are
//! written in the same transaction as the product row.

use sqlx::{PgPool, Postgres, Transaction};

use crate::catalog::slug::slugify;
use crate::orders::money;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Product, ProductCreate, ProductOption, ProductUpdate};
use shared::util::now_millis;

/// Stock on hand must stay in the admin's 0-100 range
fn validate_stock(quantity: i32) -> AppResult<()> {
    if !(0..=100).contains(&quantity) {
        return Err(
            AppError::new(ErrorCode::ProductInvalidStock).with_detail("quantity", quantity)
        );
    }
    Ok(())
}

async fn ensure_brand_exists(pool: &PgPool, brand_id: i64) -> AppResult<()> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM brands WHERE id = $1)")
        .bind(brand_id)
        .fetch_one(pool)
        .await?;
    if !exists {
        return Err(AppError::new(ErrorCode::BrandNotFound).with_detail("id", brand_id));
    }
    Ok(())
}

async fn ensure_categories_exist(pool: &PgPool, category_ids: &[i64]) -> AppResult<()> {
    if category_ids.is_empty() {
        return Ok(());
    }
    let found: Vec<i64> = sqlx::query_scalar("SELECT id FROM categories WHERE id = ANY($1)")
        .bind(category_ids)
        .fetch_all(pool)
        .await?;
    if let Some(missing) = category_ids.iter().find(|id| !found.contains(id)) {
        return Err(AppError::new(ErrorCode::CategoryNotFound).with_detail("id", *missing));
    }
    Ok(())
}

async fn link_categories(
    tx: &mut Transaction<'_, Postgres>,
    product_id: i64,
    category_ids: &[i64],
) -> AppResult<()> {
    for category_id in category_ids {
        sqlx::query("INSERT INTO category_product (category_id, product_id) VALUES ($1, $2)")
            .bind(category_id)
            .bind(product_id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

fn dedup_ids(mut ids: Vec<i64>) -> Vec<i64> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Create a product. The slug is derived from the name exactly once, here.
pub async fn create(pool: &PgPool, payload: ProductCreate) -> AppResult<Product> {
    money::validate_product_price(payload.price)?;
    let quantity = payload.quantity.unwrap_or(1);
    validate_stock(quantity)?;
    if payload.sku.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            "sku must not be empty",
        ));
    }
    let slug = slugify(&payload.name);
    if slug.is_empty() {
        return Err(AppError::validation(
            "name must contain at least one alphanumeric character",
        ));
    }

    let category_ids = dedup_ids(payload.category_ids.clone());
    ensure_brand_exists(pool, payload.brand_id).await?;
    ensure_categories_exist(pool, &category_ids).await?;

    let mut tx = pool.begin().await?;

    let product: Option<Product> = sqlx::query_as(
        r#"
        INSERT INTO products (
            name, slug, description, sku, price, quantity, type,
            is_visible, is_featured, published_at, image, brand_id,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
        ON CONFLICT (slug) DO NOTHING
        RETURNING id, name, slug, description, sku, price, quantity, type,
                  is_visible, is_featured, published_at, image, brand_id,
                  created_at, updated_at
        "#,
    )
    .bind(&payload.name)
    .bind(&slug)
    .bind(&payload.description)
    .bind(&payload.sku)
    .bind(payload.price)
    .bind(quantity)
    .bind(payload.product_type)
    .bind(payload.is_visible.unwrap_or(true))
    .bind(payload.is_featured.unwrap_or(false))
    .bind(&payload.published_at)
    .bind(&payload.image)
    .bind(payload.brand_id)
    .bind(now_millis())
    .fetch_optional(&mut *tx)
    .await?;

    let Some(mut product) = product else {
        return Err(AppError::new(ErrorCode::SlugTaken).with_detail("slug", slug));
    };

    link_categories(&mut tx, product.id, &category_ids).await?;
    tx.commit().await?;

    product.category_ids = category_ids;
    Ok(product)
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Product> {
    let product: Option<Product> = sqlx::query_as(
        "SELECT id, name, slug, description, sku, price, quantity, type, \
                is_visible, is_featured, published_at, image, brand_id, \
                created_at, updated_at \
         FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    let mut product =
        product.ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;

    product.category_ids = sqlx::query_scalar(
        "SELECT category_id FROM category_product WHERE product_id = $1 ORDER BY category_id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;
    Ok(product)
}

pub async fn list(
    pool: &PgPool,
    search: Option<&str>,
    per_page: i64,
    offset: i64,
) -> AppResult<Vec<Product>> {
    let mut products: Vec<Product> = sqlx::query_as(
        r#"
        SELECT id, name, slug, description, sku, price, quantity, type,
               is_visible, is_featured, published_at, image, brand_id,
               created_at, updated_at
        FROM products
        WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%' OR slug ILIKE '%' || $1 || '%'
               OR sku ILIKE '%' || $1 || '%')
        ORDER BY name
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(search)
    .bind(per_page)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    if products.is_empty() {
        return Ok(products);
    }

    let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    let links: Vec<(i64, i64)> = sqlx::query_as(
        "SELECT product_id, category_id FROM category_product \
         WHERE product_id = ANY($1) ORDER BY category_id",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    for product in &mut products {
        product.category_ids = links
            .iter()
            .filter(|(pid, _)| *pid == product.id)
            .map(|(_, cid)| *cid)
            .collect();
    }
    Ok(products)
}

/// (id, name, price) triples for the order form's product picker
pub async fn options(pool: &PgPool) -> AppResult<Vec<ProductOption>> {
    let options: Vec<ProductOption> =
        sqlx::query_as("SELECT id, name, price FROM products ORDER BY name")
            .fetch_all(pool)
            .await?;
    Ok(options)
}

/// Update a product. The stored slug is retained even when the name changes.
pub async fn update(pool: &PgPool, id: i64, payload: ProductUpdate) -> AppResult<Product> {
    if let Some(price) = payload.price {
        money::validate_product_price(price)?;
    }
    if let Some(quantity) = payload.quantity {
        validate_stock(quantity)?;
    }
    if let Some(brand_id) = payload.brand_id {
        ensure_brand_exists(pool, brand_id).await?;
    }
    let category_ids = payload.category_ids.clone().map(dedup_ids);
    if let Some(ids) = &category_ids {
        ensure_categories_exist(pool, ids).await?;
    }

    let mut tx = pool.begin().await?;

    let product: Option<Product> = sqlx::query_as(
        r#"
        UPDATE products SET
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            sku = COALESCE($4, sku),
            price = COALESCE($5, price),
            quantity = COALESCE($6, quantity),
            type = COALESCE($7, type),
            is_visible = COALESCE($8, is_visible),
            is_featured = COALESCE($9, is_featured),
            published_at = COALESCE($10, published_at),
            image = COALESCE($11, image),
            brand_id = COALESCE($12, brand_id),
            updated_at = $13
        WHERE id = $1
        RETURNING id, name, slug, description, sku, price, quantity, type,
                  is_visible, is_featured, published_at, image, brand_id,
                  created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(&payload.sku)
    .bind(payload.price)
    .bind(payload.quantity)
    .bind(payload.product_type)
    .bind(payload.is_visible)
    .bind(payload.is_featured)
    .bind(&payload.published_at)
    .bind(&payload.image)
    .bind(payload.brand_id)
    .bind(now_millis())
    .fetch_optional(&mut *tx)
    .await?;

    let Some(mut product) = product else {
        return Err(AppError::new(ErrorCode::ProductNotFound).with_detail("id", id));
    };

    match category_ids {
        Some(ids) => {
            sqlx::query("DELETE FROM category_product WHERE product_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_categories(&mut tx, id, &ids).await?;
            product.category_ids = ids;
        }
        None => {
            product.category_ids = sqlx::query_scalar(
                "SELECT category_id FROM category_product WHERE product_id = $1 ORDER BY category_id",
            )
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    Ok(product)
}

/// Delete a product. Rejected while order line items still reference it:
/// unit prices are snapshots, but the item row keeps the product reference.
pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let item_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM order_items WHERE product_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if item_count > 0 {
        return Err(AppError::new(ErrorCode::ProductInOrders).with_detail("order_items", item_count));
    }

    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::ProductNotFound).with_detail("id", id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_stock_range() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(1).is_ok());
        assert!(validate_stock(100).is_ok());

        assert_eq!(
            validate_stock(-1).unwrap_err().code,
            ErrorCode::ProductInvalidStock
        );
        assert_eq!(
            validate_stock(101).unwrap_err().code,
            ErrorCode::ProductInvalidStock
        );
    }

    #[test]
    fn test_dedup_ids() {
        assert_eq!(dedup_ids(vec![3, 1, 3, 2, 1]), vec![1, 2, 3]);
        assert!(dedup_ids(vec![]).is_empty());
    }
}
