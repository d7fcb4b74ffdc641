//! Catalog fetch error types.

use derive_more::{Display, Error};

/// Specific failure conditions while fetching a plugin catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum CatalogErrorKind {
    /// The catalog endpoint could not be reached.
    #[display("Catalog transport failure: {}", _0)]
    Transport(String),

    /// The catalog endpoint answered with a non-success status.
    #[display("Catalog returned status {}: {}", status, message)]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// The response body was not a valid OpenAPI document.
    #[display("Catalog decode failure: {}", _0)]
    Decode(String),
}

/// Catalog error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog Error: {} at {}:{}", kind, file, line)]
pub struct CatalogError {
    /// The specific error kind.
    pub kind: CatalogErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
