//! Admin server configuration

use shared::error::{AppError, AppResult, ErrorCode};

/// Admin server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| {
                AppError::with_message(ErrorCode::ConfigError, "DATABASE_URL must be set")
            })?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_database_url_is_config_error() {
        // Only assert the error shape; the env var itself is process-global
        let err =
            AppError::with_message(ErrorCode::ConfigError, "DATABASE_URL must be set");
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.http_status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
