// Modules
pub mod ai_instances;
pub mod config;
pub mod connector;
pub mod database;
pub mod error;
pub mod logging;
pub mod utils;

use anyhow::Result;

pub use ai_instances::{Instance, InstanceStore};
pub use config::AppConfig;
pub use connector::{Connector, ConnectorFactory, ModelCatalog, Purpose};
pub use error::ConnectorError;

/// Open the database from `config` and build a connector factory on top of it.
///
/// Does not install a tracing subscriber; callers that want one use
/// `logging::init(&config.log_filter)`.
pub async fn bootstrap(config: &AppConfig) -> Result<ConnectorFactory> {
    let pool = database::init_database(&config.database_path).await?;
    let factory = ConnectorFactory::new(InstanceStore::new(pool));

    tracing::info!(
        "Connector factory ready with connectors: {:?}",
        factory.connector_names()
    );

    Ok(factory)
}
