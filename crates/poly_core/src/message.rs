//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A message in a conversation with the model.
///
/// Each wire shape gets its own variant rather than a single struct
/// with optional keys, so a message can never carry both text content
/// and a function call, and a function result can never lose its name.
///
/// # Examples
///
/// ```
/// use poly_core::{ChatMessage, Role};
///
/// let question = ChatMessage::user("what is the capital of Sweden?");
/// assert_eq!(question.content(), Some("what is the capital of Sweden?"));
/// assert!(question.function_call().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatMessage {
    /// A plain text message from the system, the user, or the model.
    Text {
        /// The role of the message sender
        role: Role,
        /// Message content
        content: String,
    },

    /// An assistant message requesting a function invocation.
    FunctionCall {
        /// Name of the function the model chose
        name: String,
        /// JSON-encoded argument string, exactly as the model produced it
        arguments: String,
    },

    /// The result of executing a function, fed back to the model.
    FunctionResult {
        /// Name of the function that was executed
        name: String,
        /// Raw response body from the execution call
        content: String,
    },
}

impl ChatMessage {
    /// Creates a system text message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::Text {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user text message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::Text {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an assistant text message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Text {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Creates an assistant function-call message.
    pub fn function_call_message(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self::FunctionCall {
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    /// Creates a function-result message.
    pub fn function_result(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::FunctionResult {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Returns the text content of this message, if it carries any.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } | Self::FunctionResult { content, .. } => Some(content),
            Self::FunctionCall { .. } => None,
        }
    }

    /// Returns the requested function name and argument string when
    /// this message is a function call.
    pub fn function_call(&self) -> Option<(&str, &str)> {
        match self {
            Self::FunctionCall { name, arguments } => Some((name, arguments)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_accessors() {
        let msg = ChatMessage::assistant("The capital of Sweden is Stockholm.");
        assert_eq!(msg.content(), Some("The capital of Sweden is Stockholm."));
        assert!(msg.function_call().is_none());
    }

    #[test]
    fn test_function_call_accessors() {
        let msg = ChatMessage::function_call_message(
            "commsMessagingTwilioSendSms",
            r#"{"message":"tested"}"#,
        );
        assert!(msg.content().is_none());
        let (name, arguments) = msg.function_call().unwrap();
        assert_eq!(name, "commsMessagingTwilioSendSms");
        assert_eq!(arguments, r#"{"message":"tested"}"#);
    }

    #[test]
    fn test_function_result_carries_body() {
        let msg = ChatMessage::function_result("commsMessagingTwilioSendSms", "queued");
        assert_eq!(msg.content(), Some("queued"));
        assert!(msg.function_call().is_none());
    }
}
