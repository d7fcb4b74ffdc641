//! Data transfer objects for the OpenAI chat completions wire format.

use poly_core::FunctionSpec;
use serde::{Deserialize, Serialize};

/// A message in the provider's wire format.
///
/// Exactly one of `content` and `function_call` is meaningful per
/// message; the typed [`poly_core::ChatMessage`] union enforces that,
/// and the conversions module maps between the two shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    /// Role: "system", "user", "assistant", or "function"
    pub role: String,
    /// Message content; null on assistant function-call messages
    pub content: Option<String>,
    /// Function name; present only on function-result messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Function call requested by the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<WireFunctionCall>,
}

/// A function call carried inside an assistant message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireFunctionCall {
    /// Name of the chosen function
    pub name: String,
    /// JSON-encoded argument string
    pub arguments: String,
}

/// Chat completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<WireMessage>,
    /// Function-calling schema, when the call is in function mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<FunctionSpec>>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A choice in the provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The reply message
    pub message: WireMessage,
    /// Reason the model stopped: "stop", "function_call", "length", ...
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: Option<usize>,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: Option<usize>,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: Option<usize>,
}

/// Chat completion response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Response choices
    pub choices: Vec<ChatChoice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}
