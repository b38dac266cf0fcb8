use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

/// Create all tables used by the AI manager layer
pub async fn create_tables(pool: &Pool<Sqlite>) -> Result<()> {
    // Configured connector instances
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ai_manager_instance (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL DEFAULT '',
            connector TEXT NOT NULL,
            tenant TEXT NOT NULL DEFAULT '',
            endpoint TEXT NOT NULL,
            apikey TEXT NOT NULL DEFAULT '',
            model TEXT NOT NULL DEFAULT '',
            infolink TEXT NOT NULL DEFAULT '',
            customvalue1 TEXT,
            customvalue2 TEXT,
            timecreated DATETIME,
            timemodified DATETIME
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create ai_manager_instance table")?;

    // Lookups by connector and model
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_ai_manager_instance_connector_model
        ON ai_manager_instance(connector, model)
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create ai_manager_instance index")?;

    tracing::debug!("Database tables created successfully");

    Ok(())
}
