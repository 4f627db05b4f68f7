//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code daily workflow
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Fetch, scaffold, test and submit Advent of Code puzzles", version)]
pub struct Args {
    /// Puzzle year (defaults to the current year)
    #[arg(short, long, global = true)]
    pub year: Option<u16>,

    /// Puzzle day (defaults to today)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Base URL of the Advent of Code site
    #[arg(long, global = true, default_value = aoc_http_client::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Environment variable holding the session cookie
    #[arg(long, global = true, default_value = aoc_kit::SESSION_ENV_VAR)]
    pub session_var: String,

    /// Quiet mode - only output results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the puzzle page in the default browser
    Open,

    /// Print the puzzle input to stdout
    Fetch,

    /// Save the puzzle input as input.txt
    Save {
        /// Directory to save into (defaults to day-N)
        path: Option<PathBuf>,
    },

    /// Create a solution file from the template
    Scaffold {
        /// Directory or .rs file to create (defaults to day-N/main.rs)
        path: Option<PathBuf>,

        /// Part the solution starts with
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        part: Option<u8>,

        /// Template file to use instead of the built-in one
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Run a solver command on a test file and compare with the expected answer
    Test {
        /// Expected answer for the test input
        #[arg(short, long, allow_negative_numbers = true)]
        expected: Option<i64>,

        /// Test input file
        #[arg(long, default_value = "test.txt")]
        test_path: PathBuf,

        /// Solver command; the input path is appended as its last argument
        #[arg(last = true, required = true)]
        solver: Vec<String>,
    },

    /// Test, solve the real input and post the answer
    Submit {
        /// Part to submit
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        part: u8,

        /// Real puzzle input file
        #[arg(long, default_value = "input.txt")]
        input: PathBuf,

        /// Skip the test run
        #[arg(long)]
        no_test: bool,

        /// Test input file
        #[arg(long, default_value = "test.txt")]
        test_path: PathBuf,

        /// Expected answer for the test input
        #[arg(short, long, allow_negative_numbers = true)]
        expected: Option<i64>,

        /// Solver command; the input path is appended as its last argument
        #[arg(last = true, required = true)]
        solver: Vec<String>,
    },
}
