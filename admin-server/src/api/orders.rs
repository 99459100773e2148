//! Order endpoints
//!
//! Commands that mutate an existing order carry the caller's last-seen
//! `updated_at`; a mismatch is rejected with a stale-version conflict so
//! concurrent edits are never silently clobbered.

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use super::{ApiResult, page_window};
use crate::db;
use crate::state::AppState;
use shared::error::{ApiResponse, AppError};
use shared::models::{
    OrderCreate, OrderDetail, OrderItemAdd, OrderItemQuantityUpdate, OrderItemRemove,
    OrderStatus, OrderStatusChange, OrderSummary,
};

/// GET /api/admin/orders
#[derive(Deserialize)]
pub struct OrdersQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<String>,
    pub search: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> ApiResult<Vec<OrderSummary>> {
    let status = query
        .status
        .as_deref()
        .map(OrderStatus::from_str)
        .transpose()?;
    let (per_page, offset) = page_window(query.page, query.per_page);
    let orders = db::orders::list(
        &state.pool,
        status,
        query.search.as_deref(),
        per_page,
        offset,
    )
    .await?;
    Ok(Json(orders))
}

/// POST /api/admin/orders
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<OrderCreate>,
) -> ApiResult<OrderDetail> {
    let order = db::orders::create(&state.pool, payload).await?;
    Ok(Json(order))
}

/// GET /api/admin/orders/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<OrderDetail> {
    let order = db::orders::get(&state.pool, id).await?;
    Ok(Json(order))
}

/// DELETE /api/admin/orders/:id — soft delete
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    db::orders::soft_delete(&state.pool, id).await?;
    Ok(ApiResponse::ok())
}

/// PUT /api/admin/orders/:id/status
pub async fn change_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderStatusChange>,
) -> ApiResult<OrderDetail> {
    let order = db::orders::change_status(&state.pool, id, payload).await?;
    Ok(Json(order))
}

/// POST /api/admin/orders/:id/items
pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderItemAdd>,
) -> ApiResult<OrderDetail> {
    let order = db::orders::add_item(&state.pool, id, payload).await?;
    Ok(Json(order))
}

/// PUT /api/admin/orders/:id/items/:item_id
pub async fn update_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(i64, i64)>,
    Json(payload): Json<OrderItemQuantityUpdate>,
) -> ApiResult<OrderDetail> {
    let order = db::orders::update_item_quantity(&state.pool, id, item_id, payload).await?;
    Ok(Json(order))
}

/// DELETE /api/admin/orders/:id/items/:item_id
pub async fn remove_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(i64, i64)>,
    Json(payload): Json<OrderItemRemove>,
) -> ApiResult<OrderDetail> {
    let order =
        db::orders::remove_item(&state.pool, id, item_id, payload.expected_updated_at).await?;
    Ok(Json(order))
}
