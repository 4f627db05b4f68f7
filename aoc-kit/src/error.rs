//! Error types for the workflow library

use std::path::PathBuf;
use thiserror::Error;

/// Error raised by a solver while producing an answer
#[derive(Debug, Error)]
pub enum SolveError {
    /// The input file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The solver ran but did not yield a usable answer
    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),
    /// Any other failure inside the solver
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Main error type of the workflow operations
#[derive(Debug, Error)]
pub enum KitError {
    /// No session token available for a network operation
    #[error(
        "To reach the AoC site the session cookie must be stored in the '{var}' environment variable"
    )]
    MissingCredential { var: String },

    /// HTTP client error (connection failure, 404, other status)
    #[error("{0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Directory or file could not be created, read or written
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solver error
    #[error("Solver error: {0}")]
    Solve(#[from] SolveError),

    /// The page could not be handed to a browser
    #[error("Failed to open {url} in a browser: {source}")]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

impl KitError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| KitError::Filesystem { path, source }
    }
}
