//! Seam for the external conversation store.

use poly_core::ChatMessage;
use poly_error::PolyResult;

/// Persists conversation history per user.
///
/// Storage lives in the surrounding application; this crate only
/// reads, appends, and clears through the seam.
#[async_trait::async_trait]
pub trait ConversationStore: Send + Sync {
    /// Appends one message to the user's conversation.
    async fn append(&self, user_id: &str, message: &ChatMessage) -> PolyResult<()>;

    /// Lists the user's messages, ordered by creation time.
    async fn list(&self, user_id: &str) -> PolyResult<Vec<ChatMessage>>;

    /// Drops the user's conversation.
    async fn clear(&self, user_id: &str) -> PolyResult<()>;
}
