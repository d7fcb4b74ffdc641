//! Plugin orchestration error types.

use crate::{CatalogError, CompletionError, ExecutionError, SchemaError};
use derive_more::{Display, Error, From};

/// Error raised while driving the plugin round trip.
///
/// The orchestrator does not recover from any stage failure; every
/// variant simply wraps the stage that failed.
#[derive(Debug, Clone, Display, Error, From)]
pub enum PluginError {
    /// Fetching the plugin catalog failed.
    Catalog(CatalogError),
    /// Translating the catalog into function specs failed.
    Schema(SchemaError),
    /// A dispatcher call failed.
    Completion(CompletionError),
    /// Executing the chosen function failed.
    Execution(ExecutionError),
}

/// Result type for plugin orchestration.
pub type PluginResult<T> = Result<T, PluginError>;
