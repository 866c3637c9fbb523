//! Logger error definitions.

use thiserror::Error;

/// Errors that can occur while emitting log lines.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Severity name outside the six canonical values.
    #[error("Unknown log type: {0}")]
    UnknownSeverity(String),

    /// The output writer rejected the line.
    #[error("Failed to write log line: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for logger operations.
pub type LoggerResult<T> = Result<T, LoggerError>;
