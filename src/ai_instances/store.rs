//! SQLite-backed record store for [`Instance`] rows.

use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

use super::models::Instance;
use crate::error::{ConnectorError, Result};

const INSTANCE_COLUMNS: &str = r#"
    id, name, connector, tenant, endpoint, apikey, model, infolink,
    customvalue1, customvalue2, timecreated, timemodified
"#;

/// Create, read, update and delete instance rows by id.
#[derive(Clone)]
pub struct InstanceStore {
    db: Pool<Sqlite>,
}

impl InstanceStore {
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self { db }
    }

    /// Insert a new row and return the assigned id
    pub async fn insert(&self, instance: &Instance) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO ai_manager_instance
                (name, connector, tenant, endpoint, apikey, model, infolink,
                 customvalue1, customvalue2, timecreated, timemodified)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&instance.name)
        .bind(&instance.connector)
        .bind(&instance.tenant)
        .bind(&instance.endpoint)
        .bind(&instance.apikey)
        .bind(&instance.model)
        .bind(&instance.infolink)
        .bind(&instance.customvalue1)
        .bind(&instance.customvalue2)
        .bind(instance.timecreated)
        .bind(instance.timemodified)
        .execute(&self.db)
        .await?;

        let id = result.last_insert_rowid();
        tracing::info!(
            "Created AI instance '{}' ({}) for connector: {}",
            instance.name,
            id,
            instance.connector
        );

        Ok(id)
    }

    /// Overwrite the row matching the instance's id
    pub async fn update(&self, instance: &Instance) -> Result<()> {
        let id = instance
            .id
            .ok_or_else(|| ConnectorError::Validation("instance has not been stored".into()))?;

        let result = sqlx::query(
            r#"
            UPDATE ai_manager_instance
            SET name = ?, connector = ?, tenant = ?, endpoint = ?, apikey = ?,
                model = ?, infolink = ?, customvalue1 = ?, customvalue2 = ?,
                timemodified = ?
            WHERE id = ?
            "#,
        )
        .bind(&instance.name)
        .bind(&instance.connector)
        .bind(&instance.tenant)
        .bind(&instance.endpoint)
        .bind(&instance.apikey)
        .bind(&instance.model)
        .bind(&instance.infolink)
        .bind(&instance.customvalue1)
        .bind(&instance.customvalue2)
        .bind(instance.timemodified)
        .bind(id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ConnectorError::not_found("Instance", id));
        }

        tracing::debug!("Updated AI instance: {}", id);
        Ok(())
    }

    pub async fn load(&self, id: i64) -> Result<Instance> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM ai_manager_instance WHERE id = ?",
            INSTANCE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        let instance = row
            .map(instance_from_row)
            .ok_or_else(|| ConnectorError::not_found("Instance", id))?;

        tracing::debug!("Loaded AI instance: {}", id);
        Ok(instance)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM ai_manager_instance WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ConnectorError::not_found("Instance", id));
        }

        tracing::info!("Deleted AI instance: {}", id);
        Ok(())
    }

    /// All stored instances, oldest first
    pub async fn list(&self) -> Result<Vec<Instance>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM ai_manager_instance ORDER BY id ASC",
            INSTANCE_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        tracing::debug!("Loaded {} AI instances", rows.len());
        Ok(rows.into_iter().map(instance_from_row).collect())
    }

    pub async fn list_by_connector(&self, connector: &str) -> Result<Vec<Instance>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM ai_manager_instance WHERE connector = ? ORDER BY id ASC",
            INSTANCE_COLUMNS
        ))
        .bind(connector)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(instance_from_row).collect())
    }

    /// The oldest instance configured for `connector` with exactly `model`
    pub async fn find_by_connector_and_model(
        &self,
        connector: &str,
        model: &str,
    ) -> Result<Option<Instance>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {} FROM ai_manager_instance
            WHERE connector = ? AND model = ?
            ORDER BY id ASC
            LIMIT 1
            "#,
            INSTANCE_COLUMNS
        ))
        .bind(connector)
        .bind(model)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(instance_from_row))
    }
}

fn instance_from_row(row: SqliteRow) -> Instance {
    Instance {
        id: Some(row.get("id")),
        name: row.get("name"),
        connector: row.get("connector"),
        tenant: row.get("tenant"),
        endpoint: row.get("endpoint"),
        apikey: row.get("apikey"),
        model: row.get("model"),
        infolink: row.get("infolink"),
        customvalue1: row.get("customvalue1"),
        customvalue2: row.get("customvalue2"),
        timecreated: row.get("timecreated"),
        timemodified: row.get("timemodified"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;

    async fn setup_test_store() -> InstanceStore {
        let pool = database::init_in_memory().await.unwrap();
        InstanceStore::new(pool)
    }

    fn make_instance(name: &str, model: &str) -> Instance {
        let mut instance = Instance::new();
        instance.set_name(name);
        instance.set_connector("genericopenai");
        instance.set_tenant("test");
        instance.set_endpoint("https://api.openai.com/v1/chat/completions");
        instance.set_apikey("test-key");
        instance.set_model(model);
        instance.set_infolink("https://example.com");
        instance
    }

    #[tokio::test]
    async fn test_store_and_reload_custom_model() {
        let store = setup_test_store().await;

        let mut instance = make_instance("Test Instance", "my-custom-model-v2");
        let id = instance.store(&store).await.unwrap();
        assert_eq!(instance.id(), Some(id));
        assert!(instance.timecreated().is_some());

        let loaded = Instance::load(&store, id).await.unwrap();
        assert_eq!(loaded.model(), "my-custom-model-v2");
        assert_eq!(loaded.name(), "Test Instance");
        assert_eq!(loaded.tenant(), "test");
        assert_eq!(loaded.apikey(), "test-key");
        assert_eq!(loaded.infolink(), "https://example.com");
    }

    #[tokio::test]
    async fn test_store_twice_updates_same_row() {
        let store = setup_test_store().await;

        let mut instance = make_instance("first", "gpt-4o");
        let first_id = instance.store(&store).await.unwrap();

        instance.set_name("second");
        instance.set_customvalue1(Some("0.7".to_string()));
        let second_id = instance.store(&store).await.unwrap();

        assert_eq!(first_id, second_id);
        assert_eq!(store.list().await.unwrap().len(), 1);

        let loaded = store.load(first_id).await.unwrap();
        assert_eq!(loaded.name(), "second");
        assert_eq!(loaded.customvalue1(), Some("0.7"));
        assert_eq!(loaded.timecreated(), instance.timecreated());
    }

    #[tokio::test]
    async fn test_load_twice_is_identical() {
        let store = setup_test_store().await;
        let mut instance = make_instance("twice", "gpt-4o-mini");
        let id = instance.store(&store).await.unwrap();

        let a = store.load(id).await.unwrap();
        let b = store.load(id).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_store_requires_connector_and_endpoint() {
        let store = setup_test_store().await;

        let mut instance = make_instance("missing", "gpt-4o");
        instance.set_endpoint("");
        let result = instance.store(&store).await;
        assert!(matches!(result, Err(ConnectorError::Validation(_))));
        assert!(instance.is_new());

        instance.set_endpoint("https://example.com");
        instance.set_connector("");
        assert!(instance.store(&store).await.is_err());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_unknown_id() {
        let store = setup_test_store().await;
        let err = Instance::load(&store, 4711).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_deleted_row_is_not_found() {
        let store = setup_test_store().await;
        let mut instance = make_instance("gone", "gpt-4o");
        let id = instance.store(&store).await.unwrap();

        store.delete(id).await.unwrap();
        let timemodified = instance.timemodified();
        instance.set_name("renamed");

        let err = instance.store(&store).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(instance.timemodified(), timemodified);
        assert_eq!(instance.id(), Some(id));
    }

    #[tokio::test]
    async fn test_delete_instance() {
        let store = setup_test_store().await;
        let mut instance = make_instance("to-delete", "gpt-4o");
        let id = instance.store(&store).await.unwrap();

        instance.delete(&store).await.unwrap();
        assert!(store.load(id).await.unwrap_err().is_not_found());
        assert!(store.delete(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_find_by_connector_and_model() {
        let store = setup_test_store().await;

        let mut a = make_instance("a", "gpt-4o");
        let a_id = a.store(&store).await.unwrap();
        let mut b = make_instance("b", "gpt-4o");
        b.store(&store).await.unwrap();
        let mut other = make_instance("other", "gpt-4o");
        other.set_connector("someother");
        other.store(&store).await.unwrap();

        let found = store
            .find_by_connector_and_model("genericopenai", "gpt-4o")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), Some(a_id));

        assert!(store
            .find_by_connector_and_model("genericopenai", "GPT-4O")
            .await
            .unwrap()
            .is_none());
        assert_eq!(store.list_by_connector("genericopenai").await.unwrap().len(), 2);
    }
}
