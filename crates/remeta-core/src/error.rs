//! Error handling for the relocation engine

use std::path::PathBuf;
use thiserror::Error;

/// Core error type used throughout remeta
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RemetaError {
    #[error("I/O error on {}: {message}", path.display())]
    Io {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RemetaError {
    /// Create a new I/O error carrying the offending path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type RemetaResult<T> = Result<T, RemetaError>;
