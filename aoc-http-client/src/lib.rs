//! AOC HTTP Client Library
//!
//! This library provides the network side of the Advent of Code workflow:
//! building puzzle URLs, downloading puzzle input and posting answers.
//!
//! # Features
//!
//! - Puzzle page / input / answer URL construction for any year and day
//! - Puzzle input fetching with the response classified into typed errors
//! - Answer submission returning the raw reply from the site
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::{AocClient, AocError};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! match client.get_input(2024, 1, session) {
//!     Ok(input) => println!("{} bytes of input", input.len()),
//!     Err(AocError::NotFound { .. }) => println!("Not unlocked yet"),
//!     Err(e) => return Err(e.into()),
//! }
//!
//! // Submit an answer, the reply is not interpreted
//! let reply = client.submit_answer(2024, 1, 1, "42", session)?;
//! println!("{}", reply.body);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AnswerResponse, AocClient, AocClientBuilder, DEFAULT_BASE_URL};
pub use error::AocError;
pub use parser::extract_main_text;
pub use reqwest::{StatusCode, Url};
