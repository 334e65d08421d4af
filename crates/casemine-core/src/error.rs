//! Error types for the casemine-core library.

use thiserror::Error;

/// Main error type for the casemine library.
#[derive(Error, Debug)]
pub enum MinerError {
    /// A case document could not be loaded from its source.
    #[error("failed to load document {id}: {source}")]
    Source {
        id: String,
        #[source]
        source: std::io::Error,
    },

    /// A configured CSS selector did not parse.
    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },

    /// CSV sink error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the casemine library.
pub type Result<T> = std::result::Result<T, MinerError>;
