use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use persona_engine::domains::content::ContentRecord;
use persona_engine::domains::conversation::Message;
use persona_engine::error::PersonaEngineError;
use persona_engine::interfaces::providers::ContentRepository;
use persona_engine::providers::memory::InMemoryContentRepository;
use persona_engine::services::matcher::ContentMatcher;
use persona_engine::Result;

struct RecordingRepository {
    queries: Mutex<Vec<(String, Vec<String>)>>,
    response: Result<Option<ContentRecord>>,
}

impl RecordingRepository {
    fn returning(response: Result<Option<ContentRecord>>) -> Arc<Self> {
        Arc::new(Self {
            queries: Mutex::new(Vec::new()),
            response,
        })
    }

    async fn query_count(&self) -> usize {
        self.queries.lock().await.len()
    }
}

#[async_trait]
impl ContentRepository for RecordingRepository {
    async fn find_by_model_and_keywords(
        &self,
        model_id: &str,
        keywords: &[String],
    ) -> Result<Option<ContentRecord>> {
        self.queries
            .lock()
            .await
            .push((model_id.to_string(), keywords.to_vec()));
        match &self.response {
            Ok(record) => Ok(record.clone()),
            Err(err) => Err(PersonaEngineError::Store(err.to_string())),
        }
    }
}

fn record(id: &str, model_id: &str, keywords: &[&str]) -> ContentRecord {
    ContentRecord {
        id: id.to_string(),
        model_id: model_id.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

#[tokio::test]
async fn short_tokens_and_no_keywords_skip_the_store() {
    let repo = RecordingRepository::returning(Ok(Some(record("c1", "model-1", &["cat"]))));
    let matcher = ContentMatcher::new(repo.clone());

    let history = vec![Message::user("hi you two"), Message::user("ok im in")];
    let matched = matcher.match_content(&history, "model-1", &[]).await.unwrap();

    assert!(matched.is_none());
    assert_eq!(repo.query_count().await, 0);
}

#[tokio::test]
async fn store_receives_union_of_extracted_and_supplied_keywords() {
    let repo = RecordingRepository::returning(Ok(None));
    let matcher = ContentMatcher::new(repo.clone());

    let history = vec![Message::user("Hey there"), Message::user("I love cats")];
    matcher
        .match_content(&history, "model-1", &["feline".to_string()])
        .await
        .unwrap();

    let queries = repo.queries.lock().await;
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].0, "model-1");
    let sent: HashSet<&str> = queries[0].1.iter().map(String::as_str).collect();
    let expected: HashSet<&str> = ["there", "love", "cats", "feline"].into();
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn zero_rows_is_none_not_an_error() {
    let repo = RecordingRepository::returning(Ok(None));
    let matcher = ContentMatcher::new(repo.clone());

    let history = vec![Message::user("show me something special")];
    let matched = matcher.match_content(&history, "model-1", &[]).await.unwrap();

    assert!(matched.is_none());
    assert_eq!(repo.query_count().await, 1);
}

#[tokio::test]
async fn store_failure_propagates_instead_of_becoming_none() {
    let repo = RecordingRepository::returning(Err(PersonaEngineError::Store(
        "service unavailable".to_string(),
    )));
    let matcher = ContentMatcher::new(repo);

    let history = vec![Message::user("show me something special")];
    let err = matcher
        .match_content(&history, "model-1", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, PersonaEngineError::Store(_)));
}

#[tokio::test]
async fn matches_against_in_memory_catalog() {
    let repo = Arc::new(InMemoryContentRepository::new());
    repo.insert(record("c9", "model-1", &["cats", "feline", "love", "there"]))
        .await;
    let matcher = ContentMatcher::new(repo);

    let history = vec![Message::user("Hey there"), Message::user("I love cats")];
    let matched = matcher
        .match_content(&history, "model-1", &["feline".to_string()])
        .await
        .unwrap();
    assert_eq!(matched.as_deref(), Some("c9"));

    let other_model = matcher
        .match_content(&history, "model-2", &["feline".to_string()])
        .await
        .unwrap();
    assert!(other_model.is_none());
}
