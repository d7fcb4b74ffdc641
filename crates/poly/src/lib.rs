//! Facade over the Poly crates.
//!
//! Poly mediates between users and an LLM completion provider in two
//! modes. Completion mode answers a question with the best-matching
//! catalog entries surfaced in the prompt; plugin mode lets the model
//! call one function from a plugin's OpenAPI document and answer from
//! the result. This crate re-exports the pieces and wires them up from
//! a single [`PolyConfig`].
//!
//! # Examples
//!
//! ```no_run
//! use poly::PolyConfig;
//!
//! # async fn run() -> poly_error::PolyResult<()> {
//! let config = PolyConfig::from_env()?;
//! let chat = config.plugin_chat();
//! let messages = chat
//!     .chat("plugin-123", &config.credentials(), "Text 503-267-0612 saying hi")
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod observability;

pub use config::PolyConfig;
pub use observability::init_tracing;

pub use poly_completion::{
    Answer, CompletionAnswerer, ConversationStore, FunctionMatcher, MatchStats, Specification,
};
pub use poly_core::{
    ChatMessage, CompletionRequest, Credentials, Dispatcher, FunctionSpec, Role,
};
pub use poly_error::{PolyError, PolyResult};
pub use poly_models::ChatCompletionClient;
pub use poly_plugin::{CatalogClient, FunctionExecutor, PluginChat};
