use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

pub mod models;

/// Errors from pool construction
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("invalid database URL")]
    InvalidDatabaseUrl(#[source] sqlx::Error),
}

/// Build the connection pool from config.
///
/// Connections are established lazily on first acquire, so startup does not
/// depend on the store being reachable; a dead store surfaces per-request.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy(&config.url)
        .map_err(DatabaseError::InvalidDatabaseUrl)?;

    info!(
        "created database pool (max_connections={})",
        config.max_connections
    );
    Ok(pool)
}

/// Pings the pool to check store connectivity
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
