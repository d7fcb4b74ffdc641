//! Type conversions between Poly messages and the OpenAI wire format.

use crate::dto::{ChatCompletionRequest, WireFunctionCall, WireMessage};
use poly_core::{ChatMessage, CompletionRequest, Role};
use poly_error::{CompletionError, CompletionErrorKind, CompletionResult};
use std::str::FromStr;

/// Converts a typed message to its wire shape.
pub fn to_wire_message(message: &ChatMessage) -> WireMessage {
    match message {
        ChatMessage::Text { role, content } => WireMessage {
            role: role.to_string(),
            content: Some(content.clone()),
            name: None,
            function_call: None,
        },
        ChatMessage::FunctionCall { name, arguments } => WireMessage {
            role: Role::Assistant.to_string(),
            content: None,
            name: None,
            function_call: Some(WireFunctionCall {
                name: name.clone(),
                arguments: arguments.clone(),
            }),
        },
        ChatMessage::FunctionResult { name, content } => WireMessage {
            role: "function".to_string(),
            content: Some(content.clone()),
            name: Some(name.clone()),
            function_call: None,
        },
    }
}

/// Converts a wire message from the provider into the typed union.
///
/// A `function_call` wins over any content; a "function" role requires
/// a name; anything else is a plain text message.
pub fn from_wire_message(message: WireMessage) -> CompletionResult<ChatMessage> {
    if let Some(call) = message.function_call {
        return Ok(ChatMessage::FunctionCall {
            name: call.name,
            arguments: call.arguments,
        });
    }

    if message.role == "function" {
        let name = message.name.ok_or_else(|| {
            CompletionError::new(CompletionErrorKind::ResponseParsing(
                "Function message without a name".to_string(),
            ))
        })?;
        return Ok(ChatMessage::FunctionResult {
            name,
            content: message.content.unwrap_or_default(),
        });
    }

    let role = Role::from_str(&message.role).map_err(|_| {
        CompletionError::new(CompletionErrorKind::ResponseParsing(format!(
            "Unknown message role: {}",
            message.role
        )))
    })?;

    Ok(ChatMessage::Text {
        role,
        content: message.content.unwrap_or_default(),
    })
}

/// Converts a completion request to the provider wire format.
pub fn to_wire_request(request: &CompletionRequest, default_model: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: request
            .model
            .clone()
            .unwrap_or_else(|| default_model.to_string()),
        messages: request.messages.iter().map(to_wire_message).collect(),
        functions: request.functions.clone(),
        temperature: request.temperature,
    }
}
