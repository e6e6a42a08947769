//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use quotesite_core::DatabaseConfig;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/quotes").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Create a pool from resolved configuration.
pub async fn connect(config: &DatabaseConfig, database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout_secs,
        "creating database pool"
    );
    create_pool_with_options(
        database_url,
        config.max_connections,
        Duration::from_secs(config.acquire_timeout_secs),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p quotesite-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
