//! Error types for the Poly completion and plugin services.
//!
//! Each domain defines a kind enum describing the specific failure
//! condition plus a wrapper struct that records the source location
//! where the error was raised. The top-level [`PolyError`] aggregates
//! every domain for callers that span more than one.

mod catalog;
mod completion;
mod config;
mod execution;
mod plugin;
mod schema;

pub use catalog::{CatalogError, CatalogErrorKind, CatalogResult};
pub use completion::{CompletionError, CompletionErrorKind, CompletionResult};
pub use config::{ConfigError, ConfigErrorKind, ConfigResult};
pub use execution::{ExecutionError, ExecutionErrorKind, ExecutionResult};
pub use plugin::{PluginError, PluginResult};
pub use schema::{SchemaError, SchemaErrorKind, SchemaResult};

use derive_more::{Display, Error, From};

/// Aggregate error covering every Poly domain.
#[derive(Debug, Clone, Display, Error, From)]
pub enum PolyError {
    /// Catalog fetch failed.
    Catalog(CatalogError),
    /// LLM completion call failed.
    Completion(CompletionError),
    /// Configuration could not be loaded.
    Config(ConfigError),
    /// Function execution failed.
    Execution(ExecutionError),
    /// Plugin round trip failed.
    Plugin(PluginError),
    /// OpenAPI schema resolution failed.
    Schema(SchemaError),
}

/// Result type for operations that may cross Poly domains.
pub type PolyResult<T> = Result<T, PolyError>;
