//! Error types for the lukashian-solar crate.

use crate::astro::MAX_SOLAR_YEAR;

/// Error type for all fallible operations in the lukashian-solar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolarError {
    /// Returned when a precomputation window is empty or outside the supported years.
    #[error(
        "invalid year range: {first}..={last} (must satisfy 1 <= first <= last <= {max})",
        max = MAX_SOLAR_YEAR
    )]
    InvalidYearRange {
        /// First year of the requested window.
        first: u32,
        /// Last year of the requested window.
        last: u32,
    },

    /// Returned when an instant lies outside the precomputed window.
    #[error("instant {epoch_milliseconds} ms is outside the precomputed years")]
    OutOfRange {
        /// Calendar-epoch milliseconds of the rejected instant.
        epoch_milliseconds: i64,
    },

    /// Returned when a year lies outside the precomputed window.
    #[error("year {year} is outside the precomputed years {first}..={last}")]
    YearOutOfRange {
        /// The requested year.
        year: u32,
        /// First precomputed year.
        first: u32,
        /// Last precomputed year.
        last: u32,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] lukashian_calendar::CalendarError),
}
