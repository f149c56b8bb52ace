//! Error types for the miner catalog analyzer
//!
//! Provides structured error types for catalog loading, report assembly,
//! and report persistence. Individual product records never produce errors;
//! malformed fields degrade to empty values instead.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the analyzer
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input document has no `products` key")]
    MissingProducts,

    #[error("Input `products` is not a list: {0}")]
    InvalidProducts(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("Failed to write report to {}: {reason}", path.display())]
    OutputWrite { path: PathBuf, reason: String },

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error was raised while reading the catalog.
    ///
    /// Input errors abort the run before any output file is touched.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InputNotFound { .. }
                | Error::MissingProducts
                | Error::InvalidProducts(_)
                | Error::JsonParse(_)
        )
    }
}

/// Result type alias for the analyzer
pub type Result<T> = std::result::Result<T, Error>;
