//! Application state for the admin server

use sqlx::PgPool;

use crate::config::Config;
use shared::error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
}

impl AppState {
    /// Create a new AppState: connect the pool and run pending migrations
    pub async fn new(config: &Config) -> AppResult<Self> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;

        Ok(Self { pool })
    }
}
