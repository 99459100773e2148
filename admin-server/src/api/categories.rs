//! Category endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
};

use super::{ApiResult, ListQuery, page_window};
use crate::db;
use crate::state::AppState;
use shared::error::{ApiResponse, AppError};
use shared::models::{Category, CategoryCreate, CategoryUpdate};

/// GET /api/admin/categories
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Category>> {
    let (per_page, offset) = page_window(query.page, query.per_page);
    let categories =
        db::categories::list(&state.pool, query.search.as_deref(), per_page, offset).await?;
    Ok(Json(categories))
}

/// POST /api/admin/categories
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CategoryCreate>,
) -> ApiResult<Category> {
    let category = db::categories::create(&state.pool, payload).await?;
    Ok(Json(category))
}

/// GET /api/admin/categories/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Category> {
    let category = db::categories::get(&state.pool, id).await?;
    Ok(Json(category))
}

/// PUT /api/admin/categories/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryUpdate>,
) -> ApiResult<Category> {
    let category = db::categories::update(&state.pool, id, payload).await?;
    Ok(Json(category))
}

/// DELETE /api/admin/categories/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    db::categories::delete(&state.pool, id).await?;
    Ok(ApiResponse::ok())
}
