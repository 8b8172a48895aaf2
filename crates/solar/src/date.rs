//! Year, day and beeps under the astronomical calendar.

use serde::{Deserialize, Serialize};

/// A moment expressed as year, day-of-year and beeps of the astronomical
/// calendar.
///
/// Unlike [`lukashian_calendar::Day`], the day number ranges over 1..=366
/// because solstice-bounded years hold a varying number of true solar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SolarDate {
    year: u32,
    day: u16,
    beeps: u16,
}

impl SolarDate {
    pub(crate) fn new(year: u32, day: u16, beeps: u16) -> Self {
        Self { year, day, beeps }
    }

    /// Returns the year number.
    pub fn year(self) -> u32 {
        self.year
    }

    /// Returns the day number within the year (1..=366).
    pub fn day(self) -> u16 {
        self.day
    }

    /// Returns the beeps elapsed since the start of the day.
    pub fn beeps(self) -> u16 {
        self.beeps
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&lukashian_calendar::format_parts(self.year, self.day, self.beeps))
    }
}
