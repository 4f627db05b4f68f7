//! Puzzle identifiers and their resolution from optional values

use crate::clock::Clock;
use chrono::Datelike;
use std::fmt;

/// One daily puzzle: a (year, day) pair
///
/// No range check is made here; the site answers 404 for days that do not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    pub fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }

    /// Fill missing values from the clock's local date
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_kit::{FixedClock, PuzzleId};
    /// use chrono::NaiveDate;
    ///
    /// let clock = FixedClock(NaiveDate::from_ymd_opt(2023, 12, 7).unwrap());
    /// assert_eq!(PuzzleId::resolve(None, None, &clock), PuzzleId::new(2023, 7));
    /// assert_eq!(PuzzleId::resolve(Some(1), Some(2015), &clock), PuzzleId::new(2015, 1));
    /// ```
    pub fn resolve(day: Option<u8>, year: Option<u16>, clock: &dyn Clock) -> Self {
        match (day, year) {
            (Some(day), Some(year)) => Self { year, day },
            _ => {
                let today = clock.today();
                Self {
                    year: year.unwrap_or(today.year() as u16),
                    day: day.unwrap_or(today.day() as u8),
                }
            }
        }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/day{:02}", self.year, self.day)
    }
}

/// Which half of a puzzle an answer belongs to, always 1 or 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Part(u8);

impl Part {
    pub const ONE: Part = Part(1);
    pub const TWO: Part = Part(2);

    /// Anything other than 1 or 2, including nothing, becomes part 1
    pub fn resolve(part: Option<u8>) -> Self {
        match part {
            Some(2) => Part::TWO,
            _ => Part::ONE,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Part {
    fn default() -> Self {
        Part::ONE
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
