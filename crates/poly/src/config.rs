use derive_getters::Getters;
use poly_core::Credentials;
use poly_error::{ConfigError, ConfigErrorKind, PolyResult};
use poly_models::ChatCompletionClient;
use poly_plugin::{CatalogClient, FunctionExecutor, PluginChat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use typed_builder::TypedBuilder;

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_plugin_model() -> String {
    "gpt-4-0613".to_string()
}

/// Configuration for the Poly service clients.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct PolyConfig {
    /// API key for the completion provider
    #[builder(setter(into))]
    api_key: String,
    /// Base URL of the completion provider
    #[builder(setter(into))]
    completion_base_url: String,
    /// Base URL for plugin function execution
    #[builder(setter(into))]
    execute_base_url: String,
    /// Base URL of the plugin catalog
    #[builder(setter(into))]
    catalog_base_url: String,
    /// Model for completion answers
    #[serde(default = "default_model")]
    #[builder(default = default_model(), setter(into))]
    model: String,
    /// Model for plugin orchestration
    #[serde(default = "default_plugin_model")]
    #[builder(default = default_plugin_model(), setter(into))]
    plugin_model: String,
}

impl PolyConfig {
    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> PolyResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::FileRead(e.to_string())))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())).into())
    }

    /// Load configuration from the environment.
    ///
    /// Reads a `.env` file when present, then the `POLY_API_KEY`,
    /// `POLY_COMPLETION_BASE_URL`, `POLY_EXECUTE_BASE_URL`, and
    /// `POLY_CATALOG_BASE_URL` variables. `POLY_MODEL` and
    /// `POLY_PLUGIN_MODEL` override the model defaults.
    pub fn from_env() -> PolyResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: require_var("POLY_API_KEY")?,
            completion_base_url: require_var("POLY_COMPLETION_BASE_URL")?,
            execute_base_url: require_var("POLY_EXECUTE_BASE_URL")?,
            catalog_base_url: require_var("POLY_CATALOG_BASE_URL")?,
            model: std::env::var("POLY_MODEL").unwrap_or_else(|_| default_model()),
            plugin_model: std::env::var("POLY_PLUGIN_MODEL")
                .unwrap_or_else(|_| default_plugin_model()),
        })
    }

    /// The credentials forwarded to executed plugin functions.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.api_key.clone())
    }

    /// A provider client using the completion model.
    pub fn completion_client(&self) -> ChatCompletionClient {
        ChatCompletionClient::new(
            self.api_key.clone(),
            self.model.clone(),
            self.completion_base_url.clone(),
        )
    }

    /// A plugin orchestrator using the plugin model.
    pub fn plugin_chat(&self) -> PluginChat<ChatCompletionClient> {
        let dispatcher = ChatCompletionClient::new(
            self.api_key.clone(),
            self.plugin_model.clone(),
            self.completion_base_url.clone(),
        );
        PluginChat::new(
            dispatcher,
            CatalogClient::new(self.catalog_base_url.clone()),
            FunctionExecutor::new(self.execute_base_url.clone()),
        )
    }
}

fn require_var(name: &str) -> PolyResult<String> {
    std::env::var(name)
        .map_err(|_| ConfigError::new(ConfigErrorKind::MissingVar(name.to_string())).into())
}
