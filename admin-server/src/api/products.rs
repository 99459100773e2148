//! Product endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
};

use super::{ApiResult, ListQuery, page_window};
use crate::db;
use crate::state::AppState;
use shared::error::{ApiResponse, AppError};
use shared::models::{Product, ProductCreate, ProductOption, ProductUpdate};

/// GET /api/admin/products
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Product>> {
    let (per_page, offset) = page_window(query.page, query.per_page);
    let products =
        db::products::list(&state.pool, query.search.as_deref(), per_page, offset).await?;
    Ok(Json(products))
}

/// GET /api/admin/products/options — (id, name, price) for the line-item picker
pub async fn options(State(state): State<AppState>) -> ApiResult<Vec<ProductOption>> {
    let options = db::products::options(&state.pool).await?;
    Ok(Json(options))
}

/// POST /api/admin/products
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductCreate>,
) -> ApiResult<Product> {
    let product = db::products::create(&state.pool, payload).await?;
    Ok(Json(product))
}

/// GET /api/admin/products/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Product> {
    let product = db::products::get(&state.pool, id).await?;
    Ok(Json(product))
}

/// PUT /api/admin/products/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> ApiResult<Product> {
    let product = db::products::update(&state.pool, id, payload).await?;
    Ok(Json(product))
}

/// DELETE /api/admin/products/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    db::products::delete(&state.pool, id).await?;
    Ok(ApiResponse::ok())
}
