//! Test-then-submit orchestration

use crate::clock::Clock;
use crate::error::KitError;
use crate::puzzle::{Part, PuzzleId};
use crate::report::Reporter;
use crate::runner::run_test;
use crate::session::CredentialSource;
use crate::solver::Solver;
use aoc_http_client::{AnswerResponse, AocClient};
use log::debug;
use std::path::PathBuf;

/// How a submission should run
///
/// Built with [`SubmitOptions::new`] and chained setters; defaults follow the
/// usual layout of a day directory (`input.txt` next to `test.txt`), with the
/// test gate enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOptions {
    /// Part to submit, anything but 2 means part 1
    pub part: u8,
    /// Day, defaults to today
    pub day: Option<u8>,
    /// Year, defaults to this year
    pub year: Option<u16>,
    /// Real puzzle input
    pub input_path: PathBuf,
    /// Whether the test must pass before the real input is touched
    pub test: bool,
    /// Local test input
    pub test_path: PathBuf,
    /// Expected answer for the test input
    pub test_expected: Option<i64>,
    /// Print progress lines
    pub verbose: bool,
}

impl SubmitOptions {
    pub fn new(part: u8) -> Self {
        Self {
            part,
            day: None,
            year: None,
            input_path: PathBuf::from("input.txt"),
            test: true,
            test_path: PathBuf::from("test.txt"),
            test_expected: None,
            verbose: true,
        }
    }

    pub fn day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    pub fn test_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.test_path = path.into();
        self
    }

    pub fn test_expected(mut self, expected: Option<i64>) -> Self {
        self.test_expected = expected;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// What came of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The test gate failed; the real input was never solved
    Aborted,
    /// The answer was posted and the site replied
    Submitted {
        puzzle: PuzzleId,
        part: Part,
        answer: i64,
        /// Raw reply, not checked for "right answer"
        reply: AnswerResponse,
    },
}

impl SubmitOutcome {
    /// `true` once a reply was received, whatever it says
    pub fn succeeded(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted { .. })
    }

    pub fn reply(&self) -> Option<&AnswerResponse> {
        match self {
            SubmitOutcome::Submitted { reply, .. } => Some(reply),
            SubmitOutcome::Aborted => None,
        }
    }
}

/// Everything a submission talks to besides the solver
pub(crate) struct SubmitContext<'a> {
    pub client: &'a AocClient,
    pub credentials: &'a dyn CredentialSource,
    pub clock: &'a dyn Clock,
}

/// Testing (optional) then Submitting; a failed test ends in Aborted
///
/// The session is looked up only after the real answer is known, so a
/// missing token never costs a test run but does stop the POST.
pub(crate) fn submit<S: Solver + ?Sized>(
    ctx: &SubmitContext<'_>,
    solver: &mut S,
    options: &SubmitOptions,
) -> Result<SubmitOutcome, KitError> {
    let reporter = Reporter::new(options.verbose);
    let puzzle = PuzzleId::resolve(options.day, options.year, ctx.clock);
    let part = Part::resolve(Some(options.part));

    if options.test {
        let passed = run_test(
            &mut *solver,
            options.test_expected,
            &options.test_path,
            &reporter,
        )?;
        reporter.test_gate(passed);
        if !passed {
            debug!("submission of {} part {} aborted by test", puzzle, part);
            return Ok(SubmitOutcome::Aborted);
        }
    }

    let answer = solver.solve(&options.input_path)?;
    reporter.final_result(answer);
    reporter.submitting(puzzle, part);

    let session = ctx.credentials.require()?;
    let reply = ctx.client.submit_answer(
        puzzle.year,
        puzzle.day,
        part.get(),
        &answer.to_string(),
        &session,
    )?;
    debug!("answer for {} part {} got HTTP {}", puzzle, part, reply.status);
    reporter.reply(&reply);

    Ok(SubmitOutcome::Submitted {
        puzzle,
        part,
        answer,
        reply,
    })
}
