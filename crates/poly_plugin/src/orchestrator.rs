//! The ask / call / respond round trip.

use crate::catalog::CatalogClient;
use crate::executor::FunctionExecutor;
use crate::translate::translate;
use poly_core::{ChatMessage, CompletionRequest, Credentials, Dispatcher, FunctionSpec};
use poly_error::{CompletionError, CompletionErrorKind, PluginResult};
use tracing::{debug, info, instrument};

/// Fixed sampling temperature for plugin calls.
pub const PLUGIN_TEMPERATURE: f32 = 0.2;

/// Orchestrates the two-step plugin protocol.
///
/// One invocation runs at most two dispatcher calls: the first offers
/// the translated function schema; if the model answers with a
/// function call, the call is executed and a second dispatch produces
/// the final answer from the result. No state survives the invocation.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct PluginChat<D> {
    /// The LLM provider boundary.
    dispatcher: D,
    /// Client for the plugin's OpenAPI catalog.
    catalog: CatalogClient,
    /// Executor for the function the model chooses.
    executor: FunctionExecutor,
}

impl<D: Dispatcher> PluginChat<D> {
    /// Creates a new plugin orchestrator.
    pub fn new(dispatcher: D, catalog: CatalogClient, executor: FunctionExecutor) -> Self {
        Self {
            dispatcher,
            catalog,
            executor,
        }
    }

    /// Answers a question, letting the model invoke one plugin function.
    ///
    /// Returns the conversation produced by the protocol: a single
    /// assistant message when the model answers directly, or
    /// `[functionCall, functionResult, finalAnswer]` when it calls a
    /// function. The initiating user message is not part of the
    /// returned slice.
    ///
    /// # Errors
    ///
    /// Errors from any stage (catalog fetch, translation, dispatch,
    /// execution) propagate without local recovery.
    #[instrument(skip(self, credentials, question), fields(plugin_id = %plugin_id))]
    pub async fn chat(
        &self,
        plugin_id: &str,
        credentials: &Credentials,
        question: &str,
    ) -> PluginResult<Vec<ChatMessage>> {
        let document = self.catalog.fetch(plugin_id).await?;
        let functions = translate(&document)?;
        debug!(function_count = functions.len(), "Offering functions");

        let question_message = ChatMessage::user(question);
        let first = self
            .dispatcher
            .complete(&plugin_request(
                vec![question_message.clone()],
                functions.clone(),
            )?)
            .await?;

        let Some((name, arguments)) = first
            .function_call()
            .map(|(name, arguments)| (name.to_string(), arguments.to_string()))
        else {
            info!("Model answered without calling a function");
            return Ok(vec![first]);
        };

        info!(function = %name, "Model chose a function");
        let result = self
            .executor
            .execute(credentials, &document, &name, &arguments)
            .await?;

        let conversation = vec![question_message, first.clone(), result.clone()];
        let last = self
            .dispatcher
            .complete(&plugin_request(conversation, functions)?)
            .await?;

        Ok(vec![first, result, last])
    }
}

fn plugin_request(
    messages: Vec<ChatMessage>,
    functions: Vec<FunctionSpec>,
) -> Result<CompletionRequest, CompletionError> {
    CompletionRequest::builder()
        .messages(messages)
        .functions(functions)
        .temperature(PLUGIN_TEMPERATURE)
        .build()
        .map_err(|e| CompletionError::new(CompletionErrorKind::InvalidRequest(e.to_string())))
}
