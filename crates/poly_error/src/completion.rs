//! LLM completion error types.

use derive_more::{Display, Error};

/// Specific failure conditions for chat completion calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum CompletionErrorKind {
    /// The provider rejected the call with a rate limit.
    #[display("Provider rate limit exceeded")]
    RateLimited,

    /// The provider could not be reached.
    #[display("Provider unavailable: {}", _0)]
    Unavailable(String),

    /// The provider answered with a non-success status.
    #[display("Provider error (status {}): {}", status, message)]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the provider.
        message: String,
    },

    /// The completion was truncated by the provider's token limit.
    #[display("Completion hit the provider token limit")]
    TooLong,

    /// The request could not be assembled for the wire.
    #[display("Invalid completion request: {}", _0)]
    InvalidRequest(String),

    /// The provider response could not be decoded.
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
}

/// Completion error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Completion Error: {} at {}:{}", kind, file, line)]
pub struct CompletionError {
    /// The specific error kind.
    pub kind: CompletionErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl CompletionError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// True when the completion was cut off by the token limit.
    pub fn is_too_long(&self) -> bool {
        matches!(self.kind, CompletionErrorKind::TooLong)
    }
}

/// Result type for completion operations.
pub type CompletionResult<T> = Result<T, CompletionError>;
