//! Database access for the `productos` table.
//!
//! Exposes pool construction and a start-up health check, the [`models`] the
//! table maps to, and the [`repositories`] that run one parameterized
//! statement per product operation.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod config;
pub mod models;
pub mod repositories;

pub use config::DatabaseConfig;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the database configuration.
///
/// Connects eagerly, so an unreachable database fails here rather than on
/// the first request.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options: PgConnectOptions = config.connect_options()?;
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to verify the connection works.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    tracing::debug!("Database health check query succeeded");
    Ok(())
}
