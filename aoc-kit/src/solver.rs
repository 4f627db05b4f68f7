//! The solver capability

use crate::error::SolveError;
use std::path::Path;

/// Anything that turns an input file into an answer
///
/// Closures taking `&Path` and returning `Result<i64, SolveError>` are solvers:
///
/// ```
/// use aoc_kit::{Solver, SolveError, read_input};
/// use std::path::Path;
///
/// let mut line_count = |path: &Path| -> Result<i64, SolveError> {
///     Ok(read_input(path)?.lines().count() as i64)
/// };
/// # let _ = line_count.solve(Path::new("missing.txt"));
/// ```
pub trait Solver {
    /// Compute the answer for the input stored at `input`
    fn solve(&mut self, input: &Path) -> Result<i64, SolveError>;
}

impl<F> Solver for F
where
    F: FnMut(&Path) -> Result<i64, SolveError>,
{
    fn solve(&mut self, input: &Path) -> Result<i64, SolveError> {
        self(input)
    }
}

/// Read a whole input file into a string
pub fn read_input(path: &Path) -> Result<String, SolveError> {
    std::fs::read_to_string(path).map_err(|source| SolveError::Io {
        path: path.to_path_buf(),
        source,
    })
}
