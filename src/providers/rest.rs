use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::debug;

use crate::config::StoreConfig;
use crate::domains::content::ContentRecord;
use crate::error::PersonaEngineError;
use crate::interfaces::providers::ContentRepository;
use crate::Result;

/// Content repository backed by the platform's hosted database, spoken to
/// over its PostgREST-style HTTP surface. One GET per lookup; retries and
/// cancellation are left to the caller, timeouts to the client.
pub struct RestContentRepository {
    client: reqwest::Client,
    base_url: String,
    table: String,
}

impl RestContentRepository {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let api_key = config
            .api_key
            .parse::<HeaderValue>()
            .map_err(|e| PersonaEngineError::Config(e.to_string()))?;
        let bearer = format!("Bearer {}", config.api_key)
            .parse::<HeaderValue>()
            .map_err(|e| PersonaEngineError::Config(e.to_string()))?;
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| PersonaEngineError::Runtime(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            table: config.table.clone(),
        })
    }

    // PostgREST array literal for the `cs` (contains) operator.
    fn contains_literal(keywords: &[String]) -> String {
        let quoted: Vec<String> = keywords
            .iter()
            .map(|keyword| {
                format!(
                    "\"{}\"",
                    keyword.replace('\\', "\\\\").replace('"', "\\\"")
                )
            })
            .collect();
        format!("{{{}}}", quoted.join(","))
    }
}

#[async_trait]
impl ContentRepository for RestContentRepository {
    async fn find_by_model_and_keywords(
        &self,
        model_id: &str,
        keywords: &[String],
    ) -> Result<Option<ContentRecord>> {
        let url = format!("{}/{}", self.base_url, self.table);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("select", "id,model_id,keywords".to_string()),
                ("model_id", format!("eq.{model_id}")),
                ("keywords", format!("cs.{}", Self::contains_literal(keywords))),
                ("limit", "1".to_string()),
            ])
            .send()
            .await
            .map_err(|e| PersonaEngineError::Store(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PersonaEngineError::Store(format!(
                "content query returned {status}: {body}"
            )));
        }

        let mut rows: Vec<ContentRecord> = response
            .json()
            .await
            .map_err(|e| PersonaEngineError::Serialization(e.to_string()))?;
        debug!(model_id, rows = rows.len(), "content store responded");
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }
}
