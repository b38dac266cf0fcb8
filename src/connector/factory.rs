use std::collections::HashMap;
use std::sync::Arc;

use super::genericopenai::{self, GenericOpenAiConnector};
use super::Connector;
use crate::ai_instances::{Instance, InstanceStore};
use crate::error::{ConnectorError, Result};

/// Builds a connector, optionally bound to an instance
pub type ConnectorBuilder = fn(Option<Arc<Instance>>) -> Box<dyn Connector>;

fn build_genericopenai(instance: Option<Arc<Instance>>) -> Box<dyn Connector> {
    match instance {
        Some(instance) => Box::new(GenericOpenAiConnector::with_instance(instance)),
        None => Box::new(GenericOpenAiConnector::unbound()),
    }
}

/// Resolves connectors by name, by name and model, or by stored instance.
///
/// Receives its instance store at construction; there is no global registry.
#[derive(Clone)]
pub struct ConnectorFactory {
    store: InstanceStore,
    builders: HashMap<&'static str, ConnectorBuilder>,
}

impl ConnectorFactory {
    /// Factory with all built-in connector types registered
    pub fn new(store: InstanceStore) -> Self {
        let mut factory = Self {
            store,
            builders: HashMap::new(),
        };
        factory.register(genericopenai::CONNECTOR_NAME, build_genericopenai);
        factory
    }

    /// Register (or replace) a connector type
    pub fn register(&mut self, name: &'static str, builder: ConnectorBuilder) {
        if self.builders.insert(name, builder).is_some() {
            tracing::debug!("Replaced connector registration: {}", name);
        }
    }

    pub fn store(&self) -> &InstanceStore {
        &self.store
    }

    /// Registered connector names, sorted
    pub fn connector_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.builders.keys().copied().collect();
        names.sort_unstable();
        names
    }

    fn builder(&self, name: &str) -> Result<ConnectorBuilder> {
        self.builders
            .get(name)
            .copied()
            .ok_or_else(|| ConnectorError::not_found("Connector", name))
    }

    /// Connector without a bound instance, for catalog queries
    pub fn connector_by_name(&self, name: &str) -> Result<Box<dyn Connector>> {
        let build = self.builder(name)?;
        Ok(build(None))
    }

    /// Connector bound to the instance configured for `model`.
    ///
    /// Uses the oldest stored instance with this connector and model, which
    /// must pass `validate_instance`. When there is none, binds a new unsaved
    /// instance carrying `model` verbatim and the connector's default endpoint. The model is never checked
    /// against the catalog.
    pub async fn connector_by_name_and_model(
        &self,
        name: &str,
        model: &str,
    ) -> Result<Box<dyn Connector>> {
        let build = self.builder(name)?;

        match self.store.find_by_connector_and_model(name, model).await? {
            Some(instance) => {
                let connector = build(Some(Arc::new(instance)));
                connector.validate_instance(connector.instance()?)?;
                Ok(connector)
            }
            None => {
                let mut instance = Instance::new();
                instance.set_connector(name);
                instance.set_model(model);
                instance.set_endpoint(build(None).default_endpoint());
                Ok(build(Some(Arc::new(instance))))
            }
        }
    }

    /// Connector bound to the stored instance with `id`
    pub async fn connector_by_instance_id(&self, id: i64) -> Result<Box<dyn Connector>> {
        let instance = self.store.load(id).await?;
        let build = self.builder(instance.connector())?;

        let connector = build(Some(Arc::new(instance)));
        connector.validate_instance(connector.instance()?)?;

        Ok(connector)
    }
}
