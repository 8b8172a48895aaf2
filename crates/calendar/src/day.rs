//! Day within a year of the fixed-length calendar.

use serde::{Deserialize, Serialize};

use crate::constants::{BEEPS_IN_FINAL_DAY, BEEPS_PER_DAY, MAX_YEAR, MS_PER_BEEP, MS_PER_DAY};
use crate::error::CalendarError;
use crate::instant::Instant;
use crate::year::Year;

/// A day of the calendar with year context.
///
/// Ordering follows `(year, number)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDay")]
pub struct Day {
    year: Year,
    #[serde(rename = "day")]
    number: u16,
}

#[derive(Deserialize)]
struct RawDay {
    year: Year,
    day: u16,
}

impl TryFrom<RawDay> for Day {
    type Error = CalendarError;

    fn try_from(raw: RawDay) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.day)
    }
}

impl Day {
    /// Creates a new `Day` from a year and a 1-based day number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `number` is not in
    /// 1..=[`Year::number_of_days`].
    pub fn new(year: Year, number: u16) -> Result<Self, CalendarError> {
        let max_day = year.number_of_days();
        if !(1..=max_day).contains(&number) {
            return Err(CalendarError::InvalidDay {
                day: number,
                max_day,
            });
        }
        Ok(Self { year, number })
    }

    pub(crate) const fn from_valid(year: Year, number: u16) -> Self {
        Self { year, number }
    }

    /// Returns the year this day belongs to.
    pub fn year(self) -> Year {
        self.year
    }

    /// Returns the day number within the year (1..=[`Year::number_of_days`]).
    pub fn number(self) -> u16 {
        self.number
    }

    /// Returns the 0-based index of this day within its year.
    pub fn index(self) -> usize {
        usize::from(self.number - 1)
    }

    /// Returns the number of beeps in this day.
    ///
    /// Only the last day of [`MAX_YEAR`] is short.
    pub fn number_of_beeps(self) -> u16 {
        if self.year.number() == MAX_YEAR && self.number == self.year.number_of_days() {
            BEEPS_IN_FINAL_DAY
        } else {
            BEEPS_PER_DAY
        }
    }

    /// Returns the first calendar-epoch millisecond of this day.
    pub fn first_millisecond(self) -> i64 {
        self.year.first_millisecond() + i64::from(self.number - 1) * MS_PER_DAY
    }

    /// Returns the last calendar-epoch millisecond of this day.
    ///
    /// The last day of [`MAX_YEAR`] ends at `i64::MAX`.
    pub fn last_millisecond(self) -> i64 {
        let first = self.first_millisecond();
        first + (MS_PER_DAY - 1).min(i64::MAX - first)
    }

    /// Returns the instant at which this day starts.
    pub fn start(self) -> Instant {
        Instant::from_valid(self.first_millisecond())
    }

    /// Returns the last instant of this day.
    pub fn end(self) -> Instant {
        Instant::from_valid(self.last_millisecond())
    }

    /// Returns `true` if `instant` falls within this day.
    pub fn contains(self, instant: Instant) -> bool {
        (self.first_millisecond()..=self.last_millisecond()).contains(&instant.epoch_milliseconds())
    }

    /// Returns the instant at which the given beep of this day starts.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidBeeps`] if `beeps` is not below
    /// [`number_of_beeps`](Self::number_of_beeps).
    pub fn instant_at(self, beeps: u16) -> Result<Instant, CalendarError> {
        let beeps_per_day = self.number_of_beeps();
        if beeps >= beeps_per_day {
            return Err(CalendarError::InvalidBeeps {
                beeps,
                beeps_per_day,
            });
        }
        // In range: the final day's beep count stops at i64::MAX.
        let ms = self.first_millisecond() + i64::from(beeps) * MS_PER_BEEP;
        Ok(Instant::from_valid(ms))
    }

    /// Returns the next day.
    ///
    /// The last day of a year is followed by day 1 of the next year. Returns
    /// `None` past the final year.
    pub fn next(self) -> Option<Self> {
        if self.number == self.year.number_of_days() {
            self.year.next().map(Year::first_day)
        } else {
            Some(Self::from_valid(self.year, self.number + 1))
        }
    }
}
