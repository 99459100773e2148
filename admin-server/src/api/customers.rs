//! Customer endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use super::{ApiResult, ListQuery, page_window};
use crate::db;
use crate::state::AppState;
use shared::error::{ApiResponse, AppError};
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

/// GET /api/admin/customers
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Customer>> {
    let (per_page, offset) = page_window(query.page, query.per_page);
    let customers =
        db::customers::list(&state.pool, query.search.as_deref(), per_page, offset).await?;
    Ok(Json(customers))
}

/// GET /api/admin/customers/search?q=...
#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<Customer>> {
    let customers = db::customers::search_by_name(&state.pool, &query.q).await?;
    Ok(Json(customers))
}

/// POST /api/admin/customers
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CustomerCreate>,
) -> ApiResult<Customer> {
    let customer = db::customers::create(&state.pool, payload).await?;
    Ok(Json(customer))
}

/// GET /api/admin/customers/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Customer> {
    let customer = db::customers::get(&state.pool, id).await?;
    Ok(Json(customer))
}

/// PUT /api/admin/customers/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerUpdate>,
) -> ApiResult<Customer> {
    let customer = db::customers::update(&state.pool, id, payload).await?;
    Ok(Json(customer))
}

/// DELETE /api/admin/customers/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    db::customers::delete(&state.pool, id).await?;
    Ok(ApiResponse::ok())
}
