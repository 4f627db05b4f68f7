//! Human-readable progress lines for test and submit runs

use crate::puzzle::{Part, PuzzleId};
use aoc_http_client::AnswerResponse;
use std::io::{self, Write};

/// Prints progress lines when verbose, stays silent otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn say(&self, line: std::fmt::Arguments<'_>) {
        if self.verbose {
            println!("{}", line);
        }
    }

    pub fn untestable(&self) {
        self.say(format_args!(
            "To test correctly, an expected test result must be given."
        ));
    }

    pub fn test_result(&self, result: i64, passed: bool) {
        let verdict = if passed { "correct" } else { "incorrect" };
        self.say(format_args!("Test result: `{}`, which is {}.", result, verdict));
    }

    pub fn test_gate(&self, passed: bool) {
        if passed {
            self.say(format_args!("Test successful, running on real input."));
        } else {
            self.say(format_args!("Test failed, not running on real input."));
        }
    }

    pub fn final_result(&self, answer: i64) {
        self.say(format_args!("Final Result: `{}`", answer));
    }

    pub fn submitting(&self, puzzle: PuzzleId, part: Part) {
        self.say(format_args!(
            "Attempting to submit day {}-{} part {} to AoC.",
            puzzle.day, puzzle.year, part
        ));
    }

    /// The site's reply body, exactly as received
    pub fn reply(&self, reply: &AnswerResponse) {
        if let Err(e) = self.write_reply(reply, &mut io::stdout().lock()) {
            log::warn!("could not print the submission reply: {}", e);
        }
    }

    fn write_reply(&self, reply: &AnswerResponse, out: &mut impl Write) -> io::Result<()> {
        if self.verbose {
            writeln!(out, "{}", reply.body)?;
        }
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true)
    }
}
