//! Navigation badge counts

use axum::{Json, extract::State};

use super::ApiResult;
use crate::db;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn summary(State(state): State<AppState>) -> ApiResult<db::stats::StatsSummary> {
    let stats = db::stats::summary(&state.pool).await?;
    Ok(Json(stats))
}
