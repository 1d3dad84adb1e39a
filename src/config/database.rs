use crate::config::parse_var;
use crate::core::{AppError, Result};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Returns `None` when DATABASE_URL is not set
    pub fn from_env() -> Result<Option<Self>> {
        let Ok(url) = env::var("DATABASE_URL") else {
            return Ok(None);
        };

        Ok(Some(DatabaseConfig {
            url,
            pool_size: parse_var("DATABASE_POOL_SIZE", 5)?,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 10)?,
            run_migrations: parse_var("DATABASE_RUN_MIGRATIONS", true)?,
        }))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.pool_size > self.max_connections {
            return Err(AppError::Configuration(
                "DATABASE_POOL_SIZE cannot exceed DATABASE_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(())
    }

    /// Create a MySQL connection pool
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // 30 minutes
            .test_before_acquire(true)
            .connect(&self.url)
            .await
            .map_err(AppError::Database)
    }
}

/// Apply the bundled schema migrations
pub async fn run_migrations(pool: &MySqlPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
