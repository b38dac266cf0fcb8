//! Connectors bind an AI service provider type to the AI manager layer.
//!
//! ## Module Structure
//!
//! - `mod.rs` - The `Connector` trait shared by all connector types
//! - `purpose.rs` - The fixed set of usage categories
//! - `catalog.rs` - Per-purpose model catalogs
//! - `genericopenai.rs` - Connector for generic OpenAI-compatible APIs
//! - `factory.rs` - Resolves connectors by name, model or stored instance

pub mod catalog;
pub mod factory;
pub mod genericopenai;
pub mod purpose;

use url::Url;

use crate::ai_instances::Instance;
use crate::error::{ConnectorError, Result};

pub use catalog::ModelCatalog;
pub use factory::{ConnectorBuilder, ConnectorFactory};
pub use genericopenai::GenericOpenAiConnector;
pub use purpose::Purpose;

/// Behavior of one AI service provider type.
///
/// A connector is stateless apart from the instance it may be bound to.
/// Catalog queries work without a bound instance.
pub trait Connector: Send + Sync {
    /// Identifier of the connector type, stored in `Instance::connector`
    fn name(&self) -> &'static str;

    /// The bound instance; `NotFound` when the connector was built without one
    fn instance(&self) -> Result<&Instance>;

    /// Whether the connector uses the first custom value field
    fn has_customvalue1(&self) -> bool {
        false
    }

    /// Whether the connector uses the secondary credential field
    fn has_customvalue2(&self) -> bool {
        false
    }

    fn models_by_purpose(&self) -> ModelCatalog;

    /// Every known model of this connector type
    fn models(&self) -> Vec<String> {
        self.models_by_purpose().all_models()
    }

    /// Models offered for end-user choice
    fn selectable_models(&self) -> Vec<String> {
        self.models()
    }

    /// Endpoint pre-filled into new instances
    fn default_endpoint(&self) -> &'static str;

    /// The bound instance's endpoint as a URL
    fn endpoint(&self) -> Result<Url> {
        self.instance()?.endpoint_url()
    }

    /// Check that `instance` only relies on capabilities this connector has
    fn validate_instance(&self, instance: &Instance) -> Result<()> {
        if instance.connector() != self.name() {
            return Err(ConnectorError::CapabilityMismatch {
                connector: self.name().to_string(),
                capability: "instances of another connector type",
            });
        }
        if instance.customvalue1().is_some() && !self.has_customvalue1() {
            return Err(ConnectorError::CapabilityMismatch {
                connector: self.name().to_string(),
                capability: "customvalue1",
            });
        }
        if instance.customvalue2().is_some() && !self.has_customvalue2() {
            return Err(ConnectorError::CapabilityMismatch {
                connector: self.name().to_string(),
                capability: "customvalue2",
            });
        }
        Ok(())
    }
}
