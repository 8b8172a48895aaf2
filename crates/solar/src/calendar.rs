//! Precomputed year and day boundaries of the astronomical calendar.

use lukashian_calendar::constants::{BEEPS_PER_DAY, MS_PER_DAY};
use lukashian_calendar::Instant;
use tracing::debug;

use crate::astro::{
    equation_of_time_ms, mean_solar_day_nanos, perihelion_jde_ms, solstice_jde_ms, MAX_SOLAR_YEAR,
};
use crate::date::SolarDate;
use crate::error::SolarError;

/// Slack kept around the requested window, in milliseconds. Comfortably
/// larger than the equation of time.
const MARGIN_MS: i64 = 2 * MS_PER_DAY;

/// Year and day boundaries for a window of years.
///
/// Year `y` ends at the December solstice closing it; year 1 starts at the
/// calendar epoch. Day ends are mean solar day ends shifted by the equation
/// of time, so day length varies by up to half a minute. A day belongs to the
/// year in which it starts.
///
/// Building the tables walks every mean solar day since the epoch, so keep
/// one `SolarCalendar` around rather than rebuilding it per lookup.
#[derive(Debug, Clone)]
pub struct SolarCalendar {
    first_year: u32,
    last_year: u32,
    /// `year_ends[i]` is the last millisecond of year `i + 1`.
    year_ends: Vec<i64>,
    /// `day_ends[0]` is the end of the day before the first stored day
    /// (`-1` when storage starts at the epoch); `day_ends[i]` ends stored day `i`.
    day_ends: Vec<i64>,
}

impl SolarCalendar {
    /// Precomputes the calendar for `first_year..=last_year`.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::InvalidYearRange`] unless
    /// `1 <= first_year <= last_year <= MAX_SOLAR_YEAR`.
    #[tracing::instrument(level = "debug")]
    pub fn new(first_year: u32, last_year: u32) -> Result<Self, SolarError> {
        if first_year < 1 || first_year > last_year || last_year > MAX_SOLAR_YEAR {
            return Err(SolarError::InvalidYearRange {
                first: first_year,
                last: last_year,
            });
        }

        let origin = solstice_jde_ms(0);
        let year_ends: Vec<i64> = (1..=last_year + 1)
            .map(|year| solstice_jde_ms(year) - origin)
            .collect();
        let perihelia: Vec<i64> = (0..=last_year + 2)
            .map(|year| perihelion_jde_ms(year) - origin)
            .collect();

        let mut calendar = Self {
            first_year,
            last_year,
            year_ends,
            day_ends: Vec::new(),
        };

        // Days of the year before the window are kept so that a day
        // straddling the window start still gets its day number.
        let store_from = if first_year >= 2 {
            calendar.year_start(first_year - 1) - MARGIN_MS
        } else {
            0
        };
        let stop_after = calendar.year_end(last_year) + MARGIN_MS;
        if store_from <= 0 {
            calendar.day_ends.push(-1);
        }

        let mut mean_end_nanos: i128 = 0;
        let mut day: u64 = 0;
        loop {
            day += 1;
            mean_end_nanos += i128::from(mean_solar_day_nanos(day));
            let mean_end = (mean_end_nanos / 1_000_000) as i64;
            if calendar.day_ends.is_empty() && mean_end + MS_PER_DAY < store_from {
                continue;
            }

            let solstice = most_recent(&calendar.year_ends, mean_end).unwrap_or(0);
            let perihelion = most_recent(&perihelia, mean_end).unwrap_or(perihelia[0]);
            let true_end = mean_end - equation_of_time_ms(mean_end - solstice, mean_end - perihelion);
            calendar.day_ends.push(true_end);

            if calendar.day_ends.len() > 1 && true_end >= stop_after {
                break;
            }
        }

        debug!(
            first_year,
            last_year,
            days = calendar.day_ends.len() - 1,
            walked = day,
            "precomputed solar calendar"
        );
        Ok(calendar)
    }

    /// Returns the first year of the window.
    pub fn first_year(&self) -> u32 {
        self.first_year
    }

    /// Returns the last year of the window.
    pub fn last_year(&self) -> u32 {
        self.last_year
    }

    /// Returns the year, day and beeps of `instant`.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::OutOfRange`] if `instant` lies outside the
    /// precomputed years.
    pub fn date(&self, instant: Instant) -> Result<SolarDate, SolarError> {
        let ms = instant.epoch_milliseconds();
        if ms < self.year_start(self.first_year) || ms > self.year_end(self.last_year) {
            return Err(SolarError::OutOfRange {
                epoch_milliseconds: ms,
            });
        }

        // Index of the first day end at or after `ms`; always >= 1 because
        // `day_ends[0]` precedes the window.
        let index = self.day_ends.partition_point(|&end| end < ms);
        let previous_end = self.day_ends[index - 1];
        let day_start = previous_end + 1;
        let length = self.day_ends[index] - previous_end;

        let year = self.year_containing(day_start);
        let day = index - self.first_day_index(year) + 1;
        let beeps = ((ms - day_start) as f64 / length as f64 * f64::from(BEEPS_PER_DAY)).floor();

        Ok(SolarDate::new(year, day as u16, beeps as u16))
    }

    /// Returns the number of days starting in `year` (365 or 366).
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::YearOutOfRange`] outside the window.
    pub fn days_in_year(&self, year: u32) -> Result<u16, SolarError> {
        self.check_year(year)?;
        let days = self.first_day_index(year + 1) - self.first_day_index(year);
        Ok(days as u16)
    }

    /// Returns the first and last instant of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::YearOutOfRange`] outside the window.
    pub fn year_bounds(&self, year: u32) -> Result<(Instant, Instant), SolarError> {
        self.check_year(year)?;
        let start = Instant::from_epoch_milliseconds(self.year_start(year))?;
        let end = Instant::from_epoch_milliseconds(self.year_end(year))?;
        Ok((start, end))
    }

    fn check_year(&self, year: u32) -> Result<(), SolarError> {
        if !(self.first_year..=self.last_year).contains(&year) {
            return Err(SolarError::YearOutOfRange {
                year,
                first: self.first_year,
                last: self.last_year,
            });
        }
        Ok(())
    }

    fn year_start(&self, year: u32) -> i64 {
        if year == 1 {
            0
        } else {
            self.year_ends[year as usize - 2] + 1
        }
    }

    fn year_end(&self, year: u32) -> i64 {
        self.year_ends[year as usize - 1]
    }

    fn year_containing(&self, ms: i64) -> u32 {
        self.year_ends.partition_point(|&end| end < ms) as u32 + 1
    }

    /// Index into `day_ends` of the first day starting in `year`.
    fn first_day_index(&self, year: u32) -> usize {
        // The first day whose previous end is at or after `year_start - 1`.
        let target = self.year_start(year) - 1;
        self.day_ends.partition_point(|&end| end < target) + 1
    }
}

/// Returns the last entry at or before `ms`.
fn most_recent(sorted: &[i64], ms: i64) -> Option<i64> {
    let index = sorted.partition_point(|&value| value <= ms);
    index.checked_sub(1).map(|i| sorted[i])
}
