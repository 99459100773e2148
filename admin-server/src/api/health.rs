//! Health check endpoint

use axum::{Json, extract::State};

use crate::state::AppState;
use shared::error::AppError;

/// GET /health — verifies the database connection is alive
pub async fn health_check(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.pool)
        .await?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}
