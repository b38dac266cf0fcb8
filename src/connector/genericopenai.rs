//! Connector for any API that speaks the OpenAI chat completions format.
//!
//! The model is free text on the instance; the catalog below only lists
//! suggestions offered per purpose.

use std::sync::Arc;

use super::{Connector, ModelCatalog, Purpose};
use crate::ai_instances::Instance;
use crate::error::{ConnectorError, Result};

pub const CONNECTOR_NAME: &str = "genericopenai";

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

const TEXT_MODELS: &[&str] = &[
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-4.1",
    "gpt-4.1-mini",
    "gpt-4.1-nano",
    "o3-mini",
];

const VISION_MODELS: &[&str] = &["gpt-4o", "gpt-4o-mini", "gpt-4.1", "gpt-4.1-mini"];

const AGENT_MODELS: &[&str] = &["gpt-4o", "gpt-4.1", "o3-mini"];

const MODELS_BY_PURPOSE: &[(Purpose, &[&str])] = &[
    (Purpose::Chat, TEXT_MODELS),
    (Purpose::Feedback, TEXT_MODELS),
    (Purpose::SinglePrompt, TEXT_MODELS),
    (Purpose::Translate, TEXT_MODELS),
    (Purpose::Itt, VISION_MODELS),
    (Purpose::QuestionGeneration, TEXT_MODELS),
    (Purpose::Agent, AGENT_MODELS),
];

/// Generic OpenAI-compatible connector
#[derive(Debug, Clone, Default)]
pub struct GenericOpenAiConnector {
    instance: Option<Arc<Instance>>,
}

impl GenericOpenAiConnector {
    /// Connector for catalog queries only
    pub fn unbound() -> Self {
        Self { instance: None }
    }

    pub fn with_instance(instance: Arc<Instance>) -> Self {
        Self {
            instance: Some(instance),
        }
    }
}

impl Connector for GenericOpenAiConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn instance(&self) -> Result<&Instance> {
        self.instance
            .as_deref()
            .ok_or_else(|| ConnectorError::not_found("Bound instance", CONNECTOR_NAME))
    }

    fn models_by_purpose(&self) -> ModelCatalog {
        ModelCatalog::from_table(MODELS_BY_PURPOSE)
    }

    fn default_endpoint(&self) -> &'static str {
        DEFAULT_ENDPOINT
    }
}
