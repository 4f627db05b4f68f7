//! Solution templates with part/day/year placeholders

use crate::error::KitError;
use crate::puzzle::{Part, PuzzleId};
use std::fs;
use std::path::Path;

/// Placeholder replaced by the part number
pub const PART_PLACEHOLDER: &str = "{part}";
/// Placeholder replaced by the day number
pub const DAY_PLACEHOLDER: &str = "{day}";
/// Placeholder replaced by the year
pub const YEAR_PLACEHOLDER: &str = "{year}";

const BUILTIN_TEMPLATE: &str = include_str!("../templates/day.rs.template");

/// Template text for a new solution file
///
/// Substitution is purely textual: every occurrence of `{part}`, `{day}` and
/// `{year}` is replaced, any other braces are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The Rust solution skeleton shipped with the library
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TEMPLATE)
    }

    /// Load a template from a file
    pub fn from_file(path: &Path) -> Result<Self, KitError> {
        fs::read_to_string(path)
            .map(Self::new)
            .map_err(KitError::filesystem(path))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Fill in the placeholders
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_kit::{Part, PuzzleId, Template};
    ///
    /// let template = Template::new("const DAY: u8 = {day}; // {year} part {part}");
    /// assert_eq!(
    ///     template.render(Part::TWO, PuzzleId::new(2022, 5)),
    ///     "const DAY: u8 = 5; // 2022 part 2"
    /// );
    /// ```
    pub fn render(&self, part: Part, puzzle: PuzzleId) -> String {
        self.text
            .replace(PART_PLACEHOLDER, &part.to_string())
            .replace(DAY_PLACEHOLDER, &puzzle.day.to_string())
            .replace(YEAR_PLACEHOLDER, &puzzle.year.to_string())
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::builtin()
    }
}
