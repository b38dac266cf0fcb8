use thiserror::Error;

/// Errors raised by connectors, instances and the instance store.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Unknown connector name, unknown purpose tag or unknown instance id.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// An instance is missing a field required for storing.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Caller relies on a capability the connector type does not offer.
    #[error("Connector '{connector}' does not support {capability}")]
    CapabilityMismatch {
        connector: String,
        capability: &'static str,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ConnectorError {
    pub(crate) fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    /// Whether this is a `NotFound` error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
