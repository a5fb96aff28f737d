use async_trait::async_trait;

use crate::domains::content::ContentRecord;
use crate::Result;

/// Keyed lookup into the external content catalog. A match is a record for
/// the given model whose keyword set contains every element of `keywords`;
/// the exact containment semantics belong to the store. Store failures must
/// surface as `Err`, never as `Ok(None)`.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_by_model_and_keywords(
        &self,
        model_id: &str,
        keywords: &[String],
    ) -> Result<Option<ContentRecord>>;
}
