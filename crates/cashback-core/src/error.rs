//! Error types for the cashback-core library.
//!
//! Extraction itself is infallible: a match that cannot be parsed is
//! discarded and scanning continues. Errors only arise when compiling
//! patterns from a caller-supplied locale profile or when loading
//! configuration files.

use thiserror::Error;

/// Main error type for the cashback library.
#[derive(Error, Debug)]
pub enum CashbackError {
    /// A pattern built from a locale profile failed to compile.
    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed or serialized.
    #[error("configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is structurally invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the cashback library.
pub type Result<T> = std::result::Result<T, CashbackError>;
