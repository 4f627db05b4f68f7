//! Filesystem helpers and default output locations

use crate::error::KitError;
use crate::puzzle::PuzzleId;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// File name puzzle input is saved under
pub const INPUT_FILE_NAME: &str = "input.txt";

/// File name of a scaffolded solution
pub const SOLUTION_FILE_NAME: &str = "main.rs";

/// Create `path` and every missing parent directory
///
/// An existing directory, or an empty path, is a no-op, so calling this
/// repeatedly is harmless.
///
/// # Errors
///
/// `KitError::Filesystem` when a segment cannot be created, e.g. because a
/// file of the same name is in the way or permissions are missing.
pub fn ensure_dir(path: &Path) -> Result<(), KitError> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }
    debug!("creating directory {}", path.display());
    fs::create_dir_all(path).map_err(KitError::filesystem(path))
}

/// Write `contents` to `path`, creating the parent directory first
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), KitError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    debug!("writing {} bytes to {}", contents.len(), path.display());
    fs::write(path, contents).map_err(KitError::filesystem(path))
}

/// Directory used when the caller gives none: `day-{day}`
pub fn day_dir(puzzle: PuzzleId) -> PathBuf {
    PathBuf::from(format!("day-{}", puzzle.day))
}

/// Where input for `puzzle` is written
///
/// A given path is treated as a directory unless its last component is
/// already `input.txt`.
pub fn input_path(path: Option<&Path>, puzzle: PuzzleId) -> PathBuf {
    let mut path = path.map_or_else(|| day_dir(puzzle), Path::to_path_buf);
    if path.file_name().is_none_or(|name| name != INPUT_FILE_NAME) {
        path.push(INPUT_FILE_NAME);
    }
    path
}

/// Where the solution for `puzzle` is scaffolded
///
/// A given path ending in `.rs` is used as is; anything else is treated as a
/// directory and `main.rs` is placed inside it.
pub fn solution_path(path: Option<&Path>, puzzle: PuzzleId) -> PathBuf {
    let mut path = path.map_or_else(|| day_dir(puzzle), Path::to_path_buf);
    if path.extension().is_none_or(|ext| ext != "rs") {
        path.push(SOLUTION_FILE_NAME);
    }
    path
}
