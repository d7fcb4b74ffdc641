//! Function execution error types.

use derive_more::{Display, Error};

/// Specific failure conditions while executing a catalog function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ExecutionErrorKind {
    /// The model named a function absent from the catalog.
    #[display("Unknown function: {}", _0)]
    UnknownFunction(String),

    /// The function-call arguments were not valid JSON.
    #[display("Arguments did not parse as JSON: {}", _0)]
    ArgumentParse(String),

    /// The execution endpoint could not be reached.
    #[display("Execution transport failure: {}", _0)]
    Transport(String),
}

/// Execution error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Execution Error: {} at {}:{}", kind, file, line)]
pub struct ExecutionError {
    /// The specific error kind.
    pub kind: ExecutionErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl ExecutionError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExecutionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for execution operations.
pub type ExecutionResult<T> = Result<T, ExecutionError>;
