//! The completion answer policy.

use crate::{build_prompt_messages, ConversationStore, FunctionMatcher, MatchStats};
use poly_core::{ChatMessage, CompletionRequest, Dispatcher};
use poly_error::{CompletionError, CompletionErrorKind, PolyError, PolyResult};
use tracing::{instrument, warn};
use typed_builder::TypedBuilder;

/// Notice appended to an answer produced after a token-limit reset.
pub const TOKEN_LIMIT_NOTICE: &str = "\n\nTOKEN LIMIT HIT\n\nPoly has hit the model token limit for this conversation. Conversation reset. Please try again to see the full answer.";

/// A completed answer with its match statistics.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Answer {
    /// The model's answer text
    content: String,
    /// How the question matched the catalog
    stats: MatchStats,
    /// Whether the conversation was reset by the token-limit policy
    conversation_reset: bool,
}

/// Answers questions through prompt assembly and an explicit
/// token-limit policy.
///
/// When a completion comes back truncated, the policy resets the
/// conversation (drops the prior history) and retries exactly once
/// with the freshly assembled prompt. A second truncation propagates
/// as an error. Nothing else is retried.
#[derive(Debug, Clone, TypedBuilder)]
pub struct CompletionAnswerer<D, M> {
    /// The LLM provider boundary.
    dispatcher: D,
    /// The specification-matching seam.
    matcher: M,
    /// Optional system prompt inserted at the head of every prompt.
    #[builder(default, setter(strip_option, into))]
    system_prompt: Option<String>,
    /// Model override; the dispatcher default applies when `None`.
    #[builder(default, setter(strip_option, into))]
    model: Option<String>,
}

impl<D: Dispatcher, M: FunctionMatcher> CompletionAnswerer<D, M> {
    /// Answers a single-turn question with no prior history.
    pub async fn answer(&self, question: &str) -> PolyResult<Answer> {
        self.answer_with_history(&[], question).await
    }

    /// Answers a question on top of an existing conversation.
    #[instrument(skip(self, priors, question), fields(prior_count = priors.len()))]
    pub async fn answer_with_history(
        &self,
        priors: &[ChatMessage],
        question: &str,
    ) -> PolyResult<Answer> {
        let (new_messages, stats) =
            build_prompt_messages(&self.matcher, self.system_prompt.as_deref(), question).await?;

        let mut conversation = priors.to_vec();
        conversation.extend(new_messages.iter().cloned());

        let (content, conversation_reset) =
            self.complete_with_reset(conversation, new_messages).await?;

        Ok(Answer {
            content,
            stats,
            conversation_reset,
        })
    }

    /// Answers a question for a stored conversation.
    ///
    /// Successful answers append the new prompt messages and the reply
    /// to the store; a token-limit reset clears the store instead.
    #[instrument(skip(self, store, question), fields(user_id = %user_id))]
    pub async fn answer_for_user(
        &self,
        store: &dyn ConversationStore,
        user_id: &str,
        question: &str,
    ) -> PolyResult<Answer> {
        let priors = store.list(user_id).await?;
        let (new_messages, stats) =
            build_prompt_messages(&self.matcher, self.system_prompt.as_deref(), question).await?;

        let mut conversation = priors;
        conversation.extend(new_messages.iter().cloned());

        let (content, conversation_reset) = self
            .complete_with_reset(conversation, new_messages.clone())
            .await?;

        if conversation_reset {
            store.clear(user_id).await?;
        } else {
            for message in &new_messages {
                store.append(user_id, message).await?;
            }
            store
                .append(user_id, &ChatMessage::assistant(content.clone()))
                .await?;
        }

        Ok(Answer {
            content,
            stats,
            conversation_reset,
        })
    }

    /// Runs one completion, applying the reset-and-retry-once policy
    /// on truncation. Returns the answer text and whether a reset
    /// happened.
    async fn complete_with_reset(
        &self,
        conversation: Vec<ChatMessage>,
        fresh: Vec<ChatMessage>,
    ) -> PolyResult<(String, bool)> {
        match self.complete(conversation).await {
            Ok(reply) => Ok((reply.content().unwrap_or_default().to_string(), false)),
            Err(PolyError::Completion(e)) if e.is_too_long() => {
                warn!("Token limit hit, resetting conversation and retrying once");
                let reply = self.complete(fresh).await?;
                let content = format!(
                    "{}{}",
                    reply.content().unwrap_or_default(),
                    TOKEN_LIMIT_NOTICE
                );
                Ok((content, true))
            }
            Err(e) => Err(e),
        }
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> PolyResult<ChatMessage> {
        let mut builder = CompletionRequest::builder();
        builder.messages(messages);
        if let Some(model) = &self.model {
            builder.model(model.clone());
        }
        let request = builder.build().map_err(|e| {
            CompletionError::new(CompletionErrorKind::InvalidRequest(e.to_string()))
        })?;

        Ok(self.dispatcher.complete(&request).await?)
    }
}
