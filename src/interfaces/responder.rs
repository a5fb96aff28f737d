use async_trait::async_trait;

use crate::config::PersonaConfig;
use crate::domains::conversation::Message;
use crate::Result;

/// Response capability consumed by the orchestrator. The canned
/// implementation stands in for a hosted generation service; swapping in a
/// real model integration must not change callers.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, history: &[Message], persona: &PersonaConfig) -> Result<String>;
}

/// Randomness seam for the canned reply picker. `pick` returns an index in
/// `0..len`; callers never invoke it with `len == 0`.
pub trait ReplySelector: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}
