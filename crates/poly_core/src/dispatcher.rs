//! The LLM provider seam.

use crate::{ChatMessage, CompletionRequest};
use poly_error::CompletionResult;

/// Boundary trait for the chat-completion exchange with the provider.
///
/// Implementations perform the single blocking request/response cycle
/// and nothing else: no retries, no streaming, no state across calls.
/// Transport and provider failures propagate to the caller.
#[async_trait::async_trait]
pub trait Dispatcher: Send + Sync {
    /// Sends the messages (and optional function schema) to the
    /// provider and returns the single reply message.
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<ChatMessage>;
}
