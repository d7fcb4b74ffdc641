//! Dispatcher client for OpenAI-compatible APIs.

use crate::conversions;
use crate::dto::ChatCompletionResponse;
use poly_core::{ChatMessage, CompletionRequest, Dispatcher};
use poly_error::{CompletionError, CompletionErrorKind, CompletionResult};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, instrument};

/// Dispatcher for any OpenAI-compatible chat completions API.
///
/// Performs exactly one request/response exchange per call; retries
/// and error recovery are the caller's responsibility.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ChatCompletionClient {
    /// Creates a new chat completion client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key sent as a bearer token
    /// * `model` - Default model identifier; requests may override it
    /// * `base_url` - Base URL up to but excluding `/chat/completions`
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        let client = Client::new();

        debug!(model = %model, url = %base_url, "Created chat completion client");

        Self {
            client,
            api_key,
            model,
            base_url,
        }
    }

    /// Returns the default model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl Dispatcher for ChatCompletionClient {
    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<ChatMessage> {
        let wire_request = conversions::to_wire_request(request, &self.model);

        debug!(
            message_count = wire_request.messages.len(),
            function_mode = wire_request.functions.is_some(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                CompletionError::new(CompletionErrorKind::Unavailable(e.to_string()))
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            error!("Provider rate limit hit");
            return Err(CompletionError::new(CompletionErrorKind::RateLimited));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Provider error");
            return Err(CompletionError::new(CompletionErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            CompletionError::new(CompletionErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        if let Some(usage) = &body.usage {
            debug!(
                prompt_tokens = ?usage.prompt_tokens,
                completion_tokens = ?usage.completion_tokens,
                total_tokens = ?usage.total_tokens,
                "Token usage"
            );
        }

        let choice = body.choices.into_iter().next().ok_or_else(|| {
            CompletionError::new(CompletionErrorKind::ResponseParsing(
                "No choices in response".to_string(),
            ))
        })?;

        // Truncated output surfaces as an explicit error so callers can
        // apply a reset-and-retry policy instead of inspecting flags.
        if choice.finish_reason.as_deref() == Some("length") {
            return Err(CompletionError::new(CompletionErrorKind::TooLong));
        }

        conversions::from_wire_message(choice.message)
    }
}
