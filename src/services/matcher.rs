use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domains::conversation::Message;
use crate::interfaces::providers::ContentRepository;
use crate::Result;

const RECENT_MESSAGE_WINDOW: usize = 3;
const MIN_TOKEN_CHARS: usize = 4;

/// Content Matcher. Derives keywords from the tail of a conversation, unions
/// them with caller-supplied keywords and asks the repository for one
/// matching record. Stateless across calls.
pub struct ContentMatcher {
    repository: Arc<dyn ContentRepository>,
}

impl ContentMatcher {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    /// Keyword set for a lookup: whitespace tokens longer than 3 characters
    /// from the last 3 messages, lowercased, unioned with `extra` and
    /// deduplicated. First-seen order is kept, but callers must not rely on
    /// ordering.
    pub fn derive_keywords(history: &[Message], extra: &[String]) -> Vec<String> {
        let recent = history
            .iter()
            .skip(history.len().saturating_sub(RECENT_MESSAGE_WINDOW));

        let mut seen = HashSet::new();
        let mut keywords = Vec::new();
        let extracted = recent.flat_map(|message| {
            message
                .content
                .to_lowercase()
                .split_whitespace()
                .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
                .map(str::to_string)
                .collect::<Vec<_>>()
        });
        for keyword in extracted.chain(extra.iter().cloned()) {
            if seen.insert(keyword.clone()) {
                keywords.push(keyword);
            }
        }
        keywords
    }

    /// Returns the id of one content record for `model_id` whose keyword set
    /// contains every derived keyword, or `None` when nothing matches. An
    /// empty derived set short-circuits to `None` without a store round trip.
    /// Repository failures propagate; they are never folded into `None`.
    pub async fn match_content(
        &self,
        history: &[Message],
        model_id: &str,
        keywords: &[String],
    ) -> Result<Option<String>> {
        let derived = Self::derive_keywords(history, keywords);
        if derived.is_empty() {
            debug!(model_id, "no keywords derived, skipping content lookup");
            return Ok(None);
        }

        debug!(model_id, keywords = ?derived, "querying content store");
        let matched = self
            .repository
            .find_by_model_and_keywords(model_id, &derived)
            .await?;
        Ok(matched.map(|record| record.id))
    }
}
