pub mod schema;

use anyhow::{Context, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::path::Path;

/// Open (creating if needed) the database at `db_path` and create tables
pub async fn init_database(db_path: &Path) -> Result<Pool<Sqlite>> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create database directory")?;
    }

    // Use SqliteConnectOptions to ensure the database file is created
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .context("Failed to connect to database")?;

    schema::create_tables(&pool).await?;

    tracing::info!("Database initialized at: {}", db_path.display());

    Ok(pool)
}

/// In-memory database with all tables.
///
/// Every SQLite connection to `:memory:` gets its own database, so the pool
/// is limited to a single connection.
pub async fn init_in_memory() -> Result<Pool<Sqlite>> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .context("Failed to create in-memory database")?;

    schema::create_tables(&pool).await?;

    Ok(pool)
}
