//! Error types

use std::io;
use thiserror::Error;

/// Result type for stimulus and analysis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing or reading token files
#[derive(Error, Debug)]
pub enum Error {
    /// Token stream does not have the expected shape
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to write the batch history
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Drawing backend failed
    #[error("Plot rendering failed: {0}")]
    Plot(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedInput(reason.into())
    }

    pub(crate) fn odd_token_count(found: usize) -> Self {
        Error::malformed(format!("odd token count {found}, tokens must come in pairs"))
    }

    pub(crate) fn token_count_mismatch(expected: usize, found: usize) -> Self {
        Error::malformed(format!("expected {expected} tokens, found {found}"))
    }

    pub(crate) fn bad_token(index: usize, token: &str) -> Self {
        Error::malformed(format!(
            "token {index} ({token:?}) is not 16 binary digits"
        ))
    }

    pub(crate) fn plot(err: impl ToString) -> Self {
        Error::Plot(err.to_string())
    }

    /// Whether this error came from a corrupted token stream.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedInput(_))
    }
}
