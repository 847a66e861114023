//! Database connection pool provisioning
//!
//! Uses sqlx PgPool with explicit connection limits and a liveness ping
//! before the pool is handed to the server.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Maximum open connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connections kept warm while the server is idle.
const DEFAULT_MAX_IDLE: u32 = 2;

/// Idle connections above `max_idle` are closed after this long.
const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Pool limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub max_idle: u32,
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_idle: DEFAULT_MAX_IDLE,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

/// Create a PostgreSQL connection pool with the default limits.
///
/// # Errors
///
/// Returns an error if the connection string is malformed, the server
/// is unreachable, or the liveness ping fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/kasir").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, PoolConfig::default()).await
}

/// Create a PostgreSQL connection pool with custom limits.
pub async fn create_pool_with_options(
    database_url: &str,
    config: PoolConfig,
) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Attempting to connect to the database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.max_idle.min(config.max_connections))
        .idle_timeout(config.idle_timeout)
        .connect(database_url)
        .await
        .inspect_err(|e| tracing::error!("Failed to open database connection: {}", e))?;

    ping(&pool)
        .await
        .inspect_err(|e| tracing::error!("Failed to ping database: {}", e))?;

    tracing::info!(
        max_connections = config.max_connections,
        max_idle = config.max_idle,
        "Database connected successfully"
    );
    Ok(pool)
}

/// Round-trip a trivial query to verify the store is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let config = PoolConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.max_idle, 2);
    }

    #[tokio::test]
    async fn malformed_url_fails_fast() {
        let result = create_pool("not a connection string").await;
        assert!(result.is_err());
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p kasir-server -- --ignored

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

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        // More tasks than connections; the pool queues the rest
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
