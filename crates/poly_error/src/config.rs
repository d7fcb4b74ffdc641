//! Configuration error types.

use derive_more::{Display, Error};

/// Specific failure conditions while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ConfigErrorKind {
    /// The config file could not be read.
    #[display("Failed to read config file: {}", _0)]
    FileRead(String),

    /// The config file did not parse as TOML.
    #[display("Failed to parse config: {}", _0)]
    Parse(String),

    /// A required environment variable is unset.
    #[display("{} not set", _0)]
    MissingVar(String),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config Error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// The specific error kind.
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
