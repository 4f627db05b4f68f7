//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// The request never produced a response (DNS, TLS, refused connection, ...)
    #[error(
        "Something went wrong requesting the AoC site. Ensure your session cookie is valid. ({0})"
    )]
    Connection(#[from] reqwest::Error),

    /// The site answered 404 for the input of this puzzle
    #[error("Cannot find an available input for {year} day {day}")]
    NotFound {
        /// Requested year
        year: u16,
        /// Requested day
        day: u8,
    },

    /// Any other status than 200 when fetching input
    #[error("An error occurred while attempting to fetch the input. Status code: {}", status.as_u16())]
    Server {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
