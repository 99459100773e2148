//! admin-server — storefront back-office service
//!
//! Long-running service that:
//! - Manages the catalog (brands, categories, products)
//! - Manages customers and orders with snapshot pricing
//! - Serves the admin UI's query surface (lists, search, badge counts)

use admin_server::{api, config::Config, state::AppState};
use shared::error::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Initialize application state (pool + migrations)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .map_err(|e| shared::error::AppError::internal(format!("Bind failed: {e}")))?;
    tracing::info!("admin-server listening on {http_addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| shared::error::AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}
