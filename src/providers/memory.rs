use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domains::content::ContentRecord;
use crate::interfaces::providers::ContentRepository;
use crate::Result;

/// In-memory content catalog for tests and local development. Containment
/// matching mirrors the hosted store: a record matches when its keyword list
/// includes every requested keyword.
#[derive(Default)]
pub struct InMemoryContentRepository {
    records: RwLock<Vec<ContentRecord>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: ContentRecord) {
        self.records.write().await.push(record);
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn find_by_model_and_keywords(
        &self,
        model_id: &str,
        keywords: &[String],
    ) -> Result<Option<ContentRecord>> {
        let records = self.records.read().await;
        let matched = records
            .iter()
            .find(|record| {
                record.model_id == model_id
                    && keywords.iter().all(|keyword| record.keywords.contains(keyword))
            })
            .cloned();
        Ok(matched)
    }
}
