//! Brand endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
};

use super::{ApiResult, ListQuery, page_window};
use crate::db;
use crate::state::AppState;
use shared::error::{ApiResponse, AppError};
use shared::models::{Brand, BrandCreate, BrandUpdate};

/// GET /api/admin/brands
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Brand>> {
    let (per_page, offset) = page_window(query.page, query.per_page);
    let brands = db::brands::list(&state.pool, query.search.as_deref(), per_page, offset).await?;
    Ok(Json(brands))
}

/// POST /api/admin/brands
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BrandCreate>,
) -> ApiResult<Brand> {
    let brand = db::brands::create(&state.pool, payload).await?;
    Ok(Json(brand))
}

/// GET /api/admin/brands/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Brand> {
    let brand = db::brands::get(&state.pool, id).await?;
    Ok(Json(brand))
}

/// PUT /api/admin/brands/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BrandUpdate>,
) -> ApiResult<Brand> {
    let brand = db::brands::update(&state.pool, id, payload).await?;
    Ok(Json(brand))
}

/// DELETE /api/admin/brands/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    db::brands::delete(&state.pool, id).await?;
    Ok(ApiResponse::ok())
}
