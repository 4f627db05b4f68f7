//! Running a solver against a local test file

use crate::error::SolveError;
use crate::report::Reporter;
use crate::solver::Solver;
use log::debug;
use std::path::Path;

/// Run `solver` on `path` and compare its answer with `expected`
///
/// Without an expected value there is nothing to compare against: the run
/// counts as failed and the solver is not invoked.
///
/// # Errors
///
/// Propagates the solver's own error.
pub fn run_test<S: Solver + ?Sized>(
    solver: &mut S,
    expected: Option<i64>,
    path: &Path,
    reporter: &Reporter,
) -> Result<bool, SolveError> {
    let Some(expected) = expected else {
        reporter.untestable();
        return Ok(false);
    };

    debug!("testing solver on {}", path.display());
    let result = solver.solve(path)?;
    let passed = result == expected;
    reporter.test_result(result, passed);
    Ok(passed)
}
