//! Connection pool and schema setup.
//!
//! One bounded pool is created at startup and shared through `AppState`.
//! The stocks table is created by an embedded migration, never per request.

pub mod stocks;

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Connects eagerly so an unreachable database fails startup.
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Successfully connected to postgres"
    );
    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("database schema is up to date");
    Ok(())
}
