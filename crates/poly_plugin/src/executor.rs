//! Execution of catalog functions chosen by the model.

use crate::catalog::OpenApiDocument;
use crate::translate::name_path_map;
use poly_core::{ChatMessage, Credentials};
use poly_error::{ExecutionError, ExecutionErrorKind, PluginResult};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Executes a function call against the plugin's HTTP endpoints.
#[derive(Debug, Clone)]
pub struct FunctionExecutor {
    client: Client,
    base_url: String,
}

impl FunctionExecutor {
    /// Creates an executor that posts to `base_url + path`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Executes the named function with the model-provided arguments.
    ///
    /// Resolves the operation name to its path, posts the parsed JSON
    /// arguments with bearer authorization, and wraps the raw response
    /// body into a function-result message. The body passes through
    /// regardless of HTTP status; status validation is a caller
    /// concern.
    ///
    /// # Errors
    ///
    /// Fails when the name has no catalog entry, when the arguments do
    /// not parse as JSON, or when the endpoint is unreachable.
    #[instrument(skip(self, credentials, document, arguments), fields(function = %name))]
    pub async fn execute(
        &self,
        credentials: &Credentials,
        document: &OpenApiDocument,
        name: &str,
        arguments: &str,
    ) -> PluginResult<ChatMessage> {
        let paths = name_path_map(document)?;
        let path = paths.get(name).ok_or_else(|| {
            error!("Model requested a function absent from the catalog");
            ExecutionError::new(ExecutionErrorKind::UnknownFunction(name.to_string()))
        })?;

        let body: serde_json::Value = serde_json::from_str(arguments).map_err(|e| {
            ExecutionError::new(ExecutionErrorKind::ArgumentParse(e.to_string()))
        })?;

        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Executing function");

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", credentials.api_key()),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Execution request failed");
                ExecutionError::new(ExecutionErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let content = response
            .text()
            .await
            .map_err(|e| ExecutionError::new(ExecutionErrorKind::Transport(e.to_string())))?;

        debug!(status = %status, "Function executed");
        Ok(ChatMessage::function_result(name, content))
    }
}
