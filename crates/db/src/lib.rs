//! Postgres persistence for genres and movies.
//!
//! The pool is an explicit handle: the binary opens it at startup with
//! [`create_pool`], passes it into the application state, and closes it with
//! [`close_pool`] during shutdown.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Close every pooled connection. Waits for checked-out connections to return.
pub async fn close_pool(pool: &DbPool) {
    pool.close().await;
    tracing::info!("Database connection pool closed");
}
