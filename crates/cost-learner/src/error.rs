//! Error types raised while loading, updating and exporting cost tables.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the cost learner.
#[derive(Debug, Error)]
pub enum CostError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("action '{name}' has arity {expected}, got {found} parameters")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid fluent: {0}")]
    InvalidFluent(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CostError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CostError>;
