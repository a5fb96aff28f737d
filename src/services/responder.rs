use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::SysRng;
use rand::TryRng;
use tracing::debug;

use crate::config::PersonaConfig;
use crate::domains::conversation::{Message, Role};
use crate::interfaces::responder::{ReplySelector, Responder};
use crate::Result;

/// Returned verbatim whenever the latest user message touches a no-go topic.
pub const NO_GO_REFUSAL: &str =
    "I'd prefer not to talk about that. Tell me about your day instead?";

/// Stand-in replies for the hosted generation service.
pub const CANNED_REPLIES: &[&str] = &[
    "I was just thinking about you... what have you been up to today?",
    "You always know exactly what to say to make me smile",
    "I have something special I think you'll really enjoy",
    "Tell me more, I could listen to you all day",
    "I saved something just for you, want to see it?",
];

/// OS-backed selector. `SysRng` cannot realistically fail; if it ever does
/// the picker degrades to the first reply rather than panicking.
pub struct OsReplySelector;

impl ReplySelector for OsReplySelector {
    fn pick(&self, len: usize) -> usize {
        let mut bytes = [0u8; 4];
        let mut rng = SysRng;
        if rng.try_fill_bytes(&mut bytes).is_err() {
            return 0;
        }
        u32::from_le_bytes(bytes) as usize % len
    }
}

/// Topic Filter & Responder. Stateless: inspects the history, owns nothing
/// persistent. A real model integration replaces this behind [`Responder`].
pub struct CannedResponder {
    selector: Arc<dyn ReplySelector>,
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new(Arc::new(OsReplySelector))
    }
}

impl CannedResponder {
    pub fn new(selector: Arc<dyn ReplySelector>) -> Self {
        Self { selector }
    }

    fn hit_no_go_topic<'a>(message: &Message, persona: &'a PersonaConfig) -> Option<&'a str> {
        if message.role != Role::User {
            return None;
        }
        let content = message.content.to_lowercase();
        persona
            .no_go_topics
            .iter()
            .find(|topic| content.contains(&topic.to_lowercase()))
            .map(String::as_str)
    }
}

#[async_trait]
impl Responder for CannedResponder {
    async fn respond(&self, history: &[Message], persona: &PersonaConfig) -> Result<String> {
        if let Some(topic) = history
            .last()
            .and_then(|message| Self::hit_no_go_topic(message, persona))
        {
            debug!(model_id = %persona.model_id, topic, "no-go topic hit, refusing");
            return Ok(NO_GO_REFUSAL.to_string());
        }

        let index = self.selector.pick(CANNED_REPLIES.len());
        debug!(
            model_id = %persona.model_id,
            history_len = history.len(),
            index,
            "no topic hit, returning canned reply"
        );
        Ok(CANNED_REPLIES[index % CANNED_REPLIES.len()].to_string())
    }
}
