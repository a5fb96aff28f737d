use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PersonaEngineError;
use crate::Result;

/// Persona/model configuration supplied by the platform per model.
///
/// `bio` is opaque structured data describing the persona; it is carried to
/// the responder but never interpreted here. `no_go_topics` is the list of
/// case-insensitive substrings that trigger a refusal when they occur in the
/// latest user message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaConfig {
    pub model_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Value,
    #[serde(default)]
    pub no_go_topics: Vec<String>,
}

impl PersonaConfig {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            display_name: None,
            bio: Value::Null,
            no_go_topics: Vec::new(),
        }
    }

    pub fn with_no_go_topics(mut self, topics: Vec<String>) -> Self {
        self.no_go_topics = topics;
        self.normalize();
        self
    }

    pub fn from_json(value: Value) -> Result<Self> {
        let mut config: Self = serde_json::from_value(value)
            .map_err(|e| PersonaEngineError::Serialization(e.to_string()))?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())
            .map_err(|e| PersonaEngineError::Config(e.to_string()))?;
        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| PersonaEngineError::Serialization(e.to_string()))?;
        Self::from_json(value)
    }

    // Blank topic entries would substring-match every message.
    fn normalize(&mut self) {
        self.no_go_topics = self
            .no_go_topics
            .iter()
            .map(|topic| topic.trim().to_string())
            .filter(|topic| !topic.is_empty())
            .collect();
    }

    fn validate(&self) -> Result<()> {
        if self.model_id.trim().is_empty() {
            return Err(PersonaEngineError::Config(
                "persona config requires a non-empty `model_id`".to_string(),
            ));
        }
        Ok(())
    }
}

/// Connection settings for the hosted content store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_table() -> String {
    "content".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: default_table(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
