//! Error types for todofmt.

use thiserror::Error;

use crate::syntax::ParseError;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The input did not match the todo grammar.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serializing the structural dump failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TodoError {
    /// Whether this error came from rejecting the input text.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Result alias used across the crate.
pub type Result<T, E = TodoError> = std::result::Result<T, E>;
