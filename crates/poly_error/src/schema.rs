//! OpenAPI schema resolution error types.

use derive_more::{Display, Error};

/// Specific failure conditions while translating an OpenAPI document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum SchemaErrorKind {
    /// A path entry carries no `post` operation.
    #[display("No post operation for path: {}", _0)]
    MissingPostOperation(String),

    /// The request body `$ref` is absent or not a component reference.
    #[display("Malformed schema reference for path {}: {:?}", path, reference)]
    MalformedRef {
        /// Path whose request body failed to resolve.
        path: String,
        /// The offending reference, if any was present.
        reference: Option<String>,
    },

    /// The referenced name is missing from `components.schemas`.
    #[display("Unknown schema: {}", _0)]
    UnknownSchema(String),
}

/// Schema resolution error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Schema Error: {} at {}:{}", kind, file, line)]
pub struct SchemaError {
    /// The specific error kind.
    pub kind: SchemaErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl SchemaError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for schema translation.
pub type SchemaResult<T> = Result<T, SchemaError>;
