//! Error types for the lukashian-calendar crate.

/// Error type for all fallible operations in the lukashian-calendar crate.
///
/// Decomposition and formatting are total once an [`Instant`](crate::Instant)
/// exists; every variant here is raised either while constructing a value or
/// while reading the host clock.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the host clock cannot be read.
    #[error("clock unavailable: {reason}")]
    ClockUnavailable {
        /// Diagnostic describing why the clock read failed.
        reason: String,
    },

    /// Returned when a millisecond value lies before the calendar epoch.
    #[error("invalid timestamp: {milliseconds} ms (must be >= 0 since the calendar epoch)")]
    InvalidTimestamp {
        /// The rejected millisecond value, relative to the calendar epoch.
        milliseconds: i64,
    },

    /// Returned when a Unix millisecond value lies past the last calendar millisecond.
    #[error("unix timestamp out of range: {unix_milliseconds} ms")]
    UnixTimestampOutOfRange {
        /// The rejected millisecond value, relative to the Unix epoch.
        unix_milliseconds: i64,
    },

    /// Returned when a year number is zero or past the last addressable year.
    #[error("invalid year: {year} (must be 1..={max_year})")]
    InvalidYear {
        /// The invalid year number that was provided.
        year: u32,
        /// The largest valid year number.
        max_year: u32,
    },

    /// Returned when a day number is outside the days of a year.
    #[error("invalid day: {day} (must be 1..={max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u16,
        /// The largest valid day number.
        max_day: u16,
    },

    /// Returned when a beep count is outside the beeps of a day.
    #[error("invalid beeps: {beeps} (must be 0..{beeps_per_day})")]
    InvalidBeeps {
        /// The invalid beep count that was provided.
        beeps: u16,
        /// The number of beeps in that day.
        beeps_per_day: u16,
    },

    /// Returned when a string does not follow the `<bbbb> <ddd>-<year>` layout.
    #[error("invalid format: {input:?} (expected \"<bbbb> <ddd>-<year>\")")]
    InvalidFormat {
        /// The string that failed to parse.
        input: String,
    },
}
