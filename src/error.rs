//! Error types for crabmail.

use thiserror::Error;

/// Top-level error type for the crabmail library.
#[derive(Debug, Error)]
pub enum CrabmailError {
    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure (terminal, log files)
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
