//! Source of "today" for defaulting day and year

use chrono::{Local, NaiveDate};

/// Supplies the local calendar date
///
/// Every operation that defaults the day or year asks a `Clock` instead of
/// reading the wall clock directly, so tests can pin the date.
pub trait Clock {
    /// Today's date in local time
    fn today(&self) -> NaiveDate;
}

/// The machine's local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date
///
/// # Example
///
/// ```
/// use aoc_kit::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 12, 7).unwrap();
/// assert_eq!(FixedClock(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
