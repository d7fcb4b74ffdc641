//! Request types for chat completion.

use crate::{ChatMessage, FunctionSpec};
use serde::{Deserialize, Serialize};

/// A chat completion request handed to a [`crate::Dispatcher`].
///
/// # Examples
///
/// ```
/// use poly_core::{ChatMessage, CompletionRequest};
///
/// let request = CompletionRequest::builder()
///     .messages(vec![ChatMessage::user("hello")])
///     .temperature(0.2)
///     .build()
///     .unwrap();
/// assert_eq!(request.messages.len(), 1);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct CompletionRequest {
    /// Conversation messages, oldest first
    pub messages: Vec<ChatMessage>,
    /// Function-calling schema; `Some` puts the call in function mode
    #[builder(setter(strip_option))]
    pub functions: Option<Vec<FunctionSpec>>,
    /// Sampling temperature
    #[builder(setter(strip_option))]
    pub temperature: Option<f32>,
    /// Model override; the dispatcher default applies when `None`
    #[builder(setter(strip_option))]
    pub model: Option<String>,
}

impl CompletionRequest {
    /// Creates a new builder for CompletionRequest.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}
