//! Database layer - connection pool, schema bootstrap, repositories
//!
//! # Design Principles
//!
//! - Connection pool shared through router state - no global handle
//! - One statement per repository call - no check-then-write
//! - Write statements use RETURNING so the stored row comes back in one trip

pub mod bootstrap;
pub mod pool;
pub mod repos;

use sqlx::PgPool;

pub use pool::{close_pool, create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;

/// Connect to the database and make sure the schema and seed rows exist.
///
/// Any failure here is fatal for startup; nothing is retried.
pub async fn connect_and_bootstrap(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, DbError> {
    let pool = create_pool_with_options(database_url, max_connections).await?;
    tracing::info!(max_connections, "Database pool established");

    if let Err(e) = bootstrap::run(&pool).await {
        close_pool(&pool).await;
        return Err(e);
    }

    Ok(pool)
}
