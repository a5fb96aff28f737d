use serde::{Deserialize, Serialize};

/// External catalog entry tagged with keywords and tied to one persona/model.
/// Callers only consume `id`; the remaining fields mirror the store row so
/// repository implementations can match locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub model_id: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}
