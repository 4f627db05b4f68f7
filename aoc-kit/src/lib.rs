//! Advent of Code workflow library
//!
//! Everything needed around a daily puzzle except the solving itself:
//! opening the puzzle page, downloading and saving input, scaffolding a
//! solution file, checking a solver against a test file and posting the
//! answer.
//!
//! # Overview
//!
//! - [`AocKit`] bundles every operation; build one with [`AocKit::new`] or
//!   [`AocKit::builder`] to swap the clock, credentials, browser or template
//! - [`Solver`] is the single capability a solution provides:
//!   `&Path -> Result<i64, SolveError>`, closures included
//! - Day and year are optional everywhere and default to the [`Clock`]'s date
//! - The session cookie comes from the `AOC_SESSION` environment variable
//!
//! # Quick Example
//!
//! ```
//! use aoc_kit::{run_test, Reporter, SolveError};
//! use std::path::Path;
//!
//! let mut solve = |_: &Path| -> Result<i64, SolveError> { Ok(6) };
//!
//! let quiet = Reporter::new(false);
//! assert!(run_test(&mut solve, Some(6), Path::new("test.txt"), &quiet).unwrap());
//! assert!(!run_test(&mut solve, None, Path::new("test.txt"), &quiet).unwrap());
//! ```
//!
//! # Submitting
//!
//! [`AocKit::submit`] runs the test first (unless disabled). When it fails
//! the real input is never solved and [`SubmitOutcome::Aborted`] is
//! returned; otherwise the answer is posted and the raw reply returned in
//! [`SubmitOutcome::Submitted`]. The reply is not checked for correctness.

mod browser;
mod clock;
mod error;
mod fs;
mod kit;
mod puzzle;
mod report;
mod runner;
mod scaffold;
mod session;
mod solver;
mod submit;

// Re-export public API
pub use browser::{BrowserOpener, SystemBrowser};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{KitError, SolveError};
pub use fs::{INPUT_FILE_NAME, SOLUTION_FILE_NAME, ensure_dir, input_path, solution_path};
pub use kit::{AocKit, KitBuilder};
pub use puzzle::{Part, PuzzleId};
pub use report::Reporter;
pub use runner::run_test;
pub use scaffold::{DAY_PLACEHOLDER, PART_PLACEHOLDER, Template, YEAR_PLACEHOLDER};
pub use session::{CredentialSource, EnvCredentials, SESSION_ENV_VAR, StaticCredentials};
pub use solver::{Solver, read_input};
pub use submit::{SubmitOptions, SubmitOutcome};

pub use aoc_http_client::{AnswerResponse, AocClient, AocError};
