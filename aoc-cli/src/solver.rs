//! Solvers backed by an external command

use crate::error::CliError;
use aoc_kit::{SolveError, Solver};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs `program args... <input path>` and reads the answer from stdout
///
/// The last non-empty line printed is the answer; stderr is passed through
/// so the solver's own diagnostics stay visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSolver {
    program: String,
    args: Vec<String>,
}

impl CommandSolver {
    pub fn new(command: &[String]) -> Result<Self, CliError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| CliError::Config("A solver command is required".to_string()))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl Solver for CommandSolver {
    fn solve(&mut self, input: &Path) -> Result<i64, SolveError> {
        debug!("running {} {:?} {}", self.program, self.args, input.display());
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(input)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                SolveError::Failed(format!("Failed to run `{}`: {}", self.program, e).into())
            })?;

        if !output.status.success() {
            return Err(SolveError::Failed(
                format!("`{}` exited with {}", self.program, output.status).into(),
            ));
        }

        parse_answer(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Take the last non-empty line of solver output as the answer
fn parse_answer(stdout: &str) -> Result<i64, SolveError> {
    let line = stdout
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .ok_or_else(|| SolveError::InvalidAnswer("solver printed nothing".to_string()))?;

    line.parse().map_err(|_| {
        SolveError::InvalidAnswer(format!("last output line `{}` is not an integer", line))
    })
}
