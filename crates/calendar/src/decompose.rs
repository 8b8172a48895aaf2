//! Decomposition of calendar-epoch milliseconds into year, day and beeps.

use crate::constants::{DAYS_PER_YEAR, MS_PER_BEEP, MS_PER_DAY};
use crate::day::Day;
use crate::error::CalendarError;
use crate::year::Year;

/// The calendar fields of a single millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decomposition {
    day: Day,
    beeps: u16,
}

impl Decomposition {
    /// Returns the year.
    pub fn year(self) -> Year {
        self.day.year()
    }

    /// Returns the day, which carries its year.
    pub fn day(self) -> Day {
        self.day
    }

    /// Returns the beeps elapsed since the start of the day.
    pub fn beeps(self) -> u16 {
        self.beeps
    }
}

/// Splits calendar-epoch milliseconds into year, day-of-year and beeps.
///
/// Years and days are 1-based, beeps are 0-based. All divisions truncate.
/// `ms` must be non-negative; [`Instant`](crate::Instant) guarantees this.
///
/// # Example
///
/// ```
/// use lukashian_calendar::decompose;
///
/// let d = decompose(0);
/// assert_eq!((d.year().number(), d.day().number(), d.beeps()), (1, 1, 0));
/// ```
pub fn decompose(ms: i64) -> Decomposition {
    debug_assert!(ms >= 0, "decompose called with negative ms {ms}");
    let total_days = ms / MS_PER_DAY;
    let days_per_year = i64::from(DAYS_PER_YEAR);

    let year_number = (total_days / days_per_year) as u32 + 1;
    let day_number = (total_days % days_per_year) as u16 + 1;
    let beeps = ((ms % MS_PER_DAY) / MS_PER_BEEP) as u16;

    Decomposition {
        day: Day::from_valid(Year::from_valid(year_number), day_number),
        beeps,
    }
}

/// Returns the first calendar-epoch millisecond of the given beep.
///
/// Inverse of [`decompose`] at beep boundaries.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`], [`CalendarError::InvalidDay`] or
/// [`CalendarError::InvalidBeeps`] for out-of-range fields.
pub fn compose(year: u32, day: u16, beeps: u16) -> Result<i64, CalendarError> {
    let day = Day::new(Year::new(year)?, day)?;
    let instant = day.instant_at(beeps)?;
    Ok(instant.epoch_milliseconds())
}
