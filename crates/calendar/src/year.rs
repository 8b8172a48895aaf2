//! Year newtype for the fixed-length calendar.

use serde::{Deserialize, Serialize};

use crate::constants::{DAYS_IN_MAX_YEAR, DAYS_PER_YEAR, MAX_YEAR, MS_PER_YEAR};
use crate::day::Day;
use crate::error::CalendarError;
use crate::instant::Instant;

/// Year of the calendar (1..=[`MAX_YEAR`]).
///
/// Year 1 starts at the calendar epoch. Every year has [`DAYS_PER_YEAR`]
/// days, except that the final year is cut off at `i64::MAX` milliseconds and
/// holds only [`DAYS_IN_MAX_YEAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Year(u32);

impl Year {
    /// Creates a new `Year` from a year number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `number` is not in 1..=[`MAX_YEAR`].
    pub fn new(number: u32) -> Result<Self, CalendarError> {
        if !(1..=MAX_YEAR).contains(&number) {
            return Err(CalendarError::InvalidYear {
                year: number,
                max_year: MAX_YEAR,
            });
        }
        Ok(Self(number))
    }

    /// Wraps a year number already known to be in range.
    pub(crate) const fn from_valid(number: u32) -> Self {
        Self(number)
    }

    /// Returns the year number.
    pub fn number(self) -> u32 {
        self.0
    }

    /// Returns the number of days in this year.
    pub fn number_of_days(self) -> u16 {
        if self.0 == MAX_YEAR {
            DAYS_IN_MAX_YEAR
        } else {
            DAYS_PER_YEAR
        }
    }

    /// Returns the first calendar-epoch millisecond of this year.
    pub fn first_millisecond(self) -> i64 {
        i64::from(self.0 - 1) * MS_PER_YEAR
    }

    /// Returns the last calendar-epoch millisecond of this year.
    ///
    /// For [`MAX_YEAR`] this is `i64::MAX`.
    pub fn last_millisecond(self) -> i64 {
        let first = self.first_millisecond();
        first + (MS_PER_YEAR - 1).min(i64::MAX - first)
    }

    /// Returns the instant at which this year starts.
    pub fn start(self) -> Instant {
        Instant::from_valid(self.first_millisecond())
    }

    /// Returns the last instant of this year.
    pub fn end(self) -> Instant {
        Instant::from_valid(self.last_millisecond())
    }

    /// Returns `true` if `instant` falls within this year.
    pub fn contains(self, instant: Instant) -> bool {
        (self.first_millisecond()..=self.last_millisecond()).contains(&instant.epoch_milliseconds())
    }

    /// Returns the given day of this year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `number` is not in
    /// 1..=[`number_of_days`](Self::number_of_days).
    pub fn day(self, number: u16) -> Result<Day, CalendarError> {
        Day::new(self, number)
    }

    /// Returns day 1 of this year.
    pub fn first_day(self) -> Day {
        Day::from_valid(self, 1)
    }

    /// Returns the last day of this year.
    pub fn last_day(self) -> Day {
        Day::from_valid(self, self.number_of_days())
    }

    /// Returns the following year, or `None` after [`MAX_YEAR`].
    pub fn next(self) -> Option<Self> {
        (self.0 < MAX_YEAR).then(|| Self(self.0 + 1))
    }

    /// Returns the preceding year, or `None` for year 1.
    pub fn previous(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }
}

impl TryFrom<u32> for Year {
    type Error = CalendarError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Year> for u32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
