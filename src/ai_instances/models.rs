use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use super::store::InstanceStore;
use crate::error::{ConnectorError, Result};

/// A configured binding of a connector to an endpoint, credentials and model.
///
/// Setters store values verbatim. In particular `model` is free text and is
/// never checked against a connector's model catalog. Secrets are left out
/// of both `Debug` and serialized output.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Instance {
    pub(crate) id: Option<i64>,
    pub(crate) name: String,
    pub(crate) connector: String,
    pub(crate) tenant: String,
    pub(crate) endpoint: String,
    #[serde(skip_serializing)]
    pub(crate) apikey: String,
    pub(crate) model: String,
    pub(crate) infolink: String,

    /// Connector-specific extra setting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) customvalue1: Option<String>,

    /// Secondary credential, only meaningful for connectors that support it
    #[serde(skip_serializing)]
    pub(crate) customvalue2: Option<String>,

    pub(crate) timecreated: Option<DateTime<Utc>>,
    pub(crate) timemodified: Option<DateTime<Utc>>,
}

impl Instance {
    /// Create an empty instance that has never been stored
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a stored instance by id
    pub async fn load(store: &InstanceStore, id: i64) -> Result<Self> {
        store.load(id).await
    }

    /// Persist the instance: insert on first call, update afterwards.
    ///
    /// `connector` and `endpoint` are required.
    pub async fn store(&mut self, store: &InstanceStore) -> Result<i64> {
        self.check_required()?;

        // Timestamps only land on `self` once the row is written
        let now = Utc::now();
        let mut record = self.clone();
        record.timemodified = Some(now);

        let id = match self.id {
            Some(id) => {
                store.update(&record).await?;
                id
            }
            None => {
                record.timecreated = Some(now);
                let id = store.insert(&record).await?;
                self.id = Some(id);
                self.timecreated = Some(now);
                id
            }
        };

        self.timemodified = Some(now);
        Ok(id)
    }

    /// Remove the stored row for this instance
    pub async fn delete(self, store: &InstanceStore) -> Result<()> {
        let id = self
            .id
            .ok_or_else(|| ConnectorError::Validation("instance has not been stored".into()))?;
        store.delete(id).await
    }

    fn check_required(&self) -> Result<()> {
        if self.connector.trim().is_empty() {
            return Err(ConnectorError::Validation("connector is required".into()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConnectorError::Validation("endpoint is required".into()));
        }
        Ok(())
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Parse the stored endpoint. Only done on request, never on set.
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint).map_err(|e| {
            ConnectorError::Validation(format!("invalid endpoint '{}': {}", self.endpoint, e))
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connector(&self) -> &str {
        &self.connector
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn apikey(&self) -> &str {
        &self.apikey
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn infolink(&self) -> &str {
        &self.infolink
    }

    pub fn customvalue1(&self) -> Option<&str> {
        self.customvalue1.as_deref()
    }

    pub fn customvalue2(&self) -> Option<&str> {
        self.customvalue2.as_deref()
    }

    pub fn timecreated(&self) -> Option<DateTime<Utc>> {
        self.timecreated
    }

    pub fn timemodified(&self) -> Option<DateTime<Utc>> {
        self.timemodified
    }

    // -----------------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_connector(&mut self, connector: impl Into<String>) {
        self.connector = connector.into();
    }

    pub fn set_tenant(&mut self, tenant: impl Into<String>) {
        self.tenant = tenant.into();
    }

    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    pub fn set_apikey(&mut self, apikey: impl Into<String>) {
        self.apikey = apikey.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn set_infolink(&mut self, infolink: impl Into<String>) {
        self.infolink = infolink.into();
    }

    pub fn set_customvalue1(&mut self, value: Option<String>) {
        self.customvalue1 = value;
    }

    pub fn set_customvalue2(&mut self, value: Option<String>) {
        self.customvalue2 = value;
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let apikey = if self.apikey.is_empty() { "" } else { "[redacted]" };
        f.debug_struct("Instance")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("connector", &self.connector)
            .field("tenant", &self.tenant)
            .field("endpoint", &self.endpoint)
            .field("apikey", &apikey)
            .field("model", &self.model)
            .field("infolink", &self.infolink)
            .field("customvalue1", &self.customvalue1)
            .field("customvalue2", &self.customvalue2.as_ref().map(|_| "[redacted]"))
            .field("timecreated", &self.timecreated)
            .field("timemodified", &self.timemodified)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_store_values_verbatim() {
        let mut instance = Instance::new();
        instance.set_name("  Padded Name ");
        instance.set_model("not-a-known-model / with spaces");
        instance.set_endpoint("not a url");

        assert_eq!(instance.name(), "  Padded Name ");
        assert_eq!(instance.model(), "not-a-known-model / with spaces");
        assert_eq!(instance.endpoint(), "not a url");
        assert!(instance.is_new());
    }

    #[test]
    fn test_endpoint_url_parses_on_request() {
        let mut instance = Instance::new();
        instance.set_endpoint("https://api.openai.com/v1/chat/completions");
        let url = instance.endpoint_url().unwrap();
        assert_eq!(url.host_str(), Some("api.openai.com"));

        instance.set_endpoint("not a url");
        assert!(matches!(
            instance.endpoint_url(),
            Err(ConnectorError::Validation(_))
        ));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut instance = Instance::new();
        instance.set_apikey("sk-very-secret");
        instance.set_customvalue2(Some("other-secret".to_string()));

        let printed = format!("{:?}", instance);
        assert!(!printed.contains("sk-very-secret"));
        assert!(!printed.contains("other-secret"));
        assert!(printed.contains("[redacted]"));
    }

    #[test]
    fn test_serialize_omits_secrets() {
        let mut instance = Instance::new();
        instance.set_name("Serialized");
        instance.set_apikey("sk-very-secret");
        instance.set_model("gpt-4o");
        instance.set_customvalue2(Some("other-secret".to_string()));

        let json = serde_json::to_string(&instance).unwrap();
        assert!(!json.contains("sk-very-secret"));
        assert!(!json.contains("other-secret"));
        assert!(!json.contains("apikey"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Serialized");
        assert_eq!(value["model"], "gpt-4o");
    }

    #[test]
    fn test_check_required_fields() {
        let mut instance = Instance::new();
        assert!(instance.check_required().is_err());

        instance.set_connector("genericopenai");
        assert!(instance.check_required().is_err());

        instance.set_endpoint("https://example.com");
        assert!(instance.check_required().is_ok());
    }
}
