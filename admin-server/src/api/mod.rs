//! API routes for the admin server

pub mod brands;
pub mod categories;
pub mod customers;
pub mod health;
pub mod orders;
pub mod products;
pub mod stats;

use axum::{Router, routing::get};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use shared::error::AppError;

pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// Common pagination/search query for list endpoints
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub search: Option<String>,
}

/// Clamp pagination to sane bounds and convert to (limit, offset)
pub(crate) fn page_window(page: Option<i64>, per_page: Option<i64>) -> (i64, i64) {
    let per_page = per_page.unwrap_or(20).clamp(1, 100);
    let page = page.unwrap_or(1).max(1);
    (per_page, (page - 1) * per_page)
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/brands", get(brands::list).post(brands::create))
        .route(
            "/brands/{id}",
            get(brands::get).put(brands::update).delete(brands::remove),
        )
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/{id}",
            get(categories::get)
                .put(categories::update)
                .delete(categories::remove),
        )
        .route("/customers", get(customers::list).post(customers::create))
        .route("/customers/search", get(customers::search))
        .route(
            "/customers/{id}",
            get(customers::get)
                .put(customers::update)
                .delete(customers::remove),
        )
        .route("/products", get(products::list).post(products::create))
        .route("/products/options", get(products::options))
        .route(
            "/products/{id}",
            get(products::get)
                .put(products::update)
                .delete(products::remove),
        )
        .route("/orders", get(orders::list).post(orders::create))
        .route(
            "/orders/{id}",
            get(orders::get).delete(orders::remove),
        )
        .route("/orders/{id}/status", axum::routing::put(orders::change_status))
        .route("/orders/{id}/items", axum::routing::post(orders::add_item))
        .route(
            "/orders/{id}/items/{item_id}",
            axum::routing::put(orders::update_item).delete(orders::remove_item),
        )
        .route("/stats", get(stats::summary));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/admin", admin)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window_defaults() {
        assert_eq!(page_window(None, None), (20, 0));
    }

    #[test]
    fn test_page_window_clamps() {
        assert_eq!(page_window(Some(0), Some(1000)), (100, 0));
        assert_eq!(page_window(Some(-5), Some(0)), (1, 0));
    }

    #[test]
    fn test_page_window_offset() {
        assert_eq!(page_window(Some(3), Some(25)), (25, 50));
    }
}
