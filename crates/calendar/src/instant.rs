//! Immutable point in time, counted in milliseconds since the calendar epoch.

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::day::Day;
use crate::decompose::{decompose, Decomposition};
use crate::epoch::{epoch_from_unix, unix_from_epoch};
use crate::error::CalendarError;
use crate::format::format;
use crate::year::Year;

/// A moment in time: milliseconds elapsed since the calendar epoch.
///
/// The year, day and beeps are derived on every call and never stored.
/// Serialises as the bare millisecond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Instant(i64);

impl Instant {
    /// Reads the current moment from the host clock.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::ClockUnavailable`] if the clock cannot be read.
    pub fn now() -> Result<Self, CalendarError> {
        SystemClock.now()
    }

    /// Creates an `Instant` from milliseconds since the calendar epoch.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimestamp`] if `ms` is negative.
    pub fn from_epoch_milliseconds(ms: i64) -> Result<Self, CalendarError> {
        if ms < 0 {
            return Err(CalendarError::InvalidTimestamp { milliseconds: ms });
        }
        Ok(Self(ms))
    }

    /// Creates an `Instant` from milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimestamp`] if the moment lies before
    /// the calendar epoch, or [`CalendarError::UnixTimestampOutOfRange`] if it
    /// lies past the last representable millisecond.
    pub fn from_unix_epoch_milliseconds(unix_ms: i64) -> Result<Self, CalendarError> {
        let ms = epoch_from_unix(unix_ms).ok_or(CalendarError::UnixTimestampOutOfRange {
            unix_milliseconds: unix_ms,
        })?;
        Self::from_epoch_milliseconds(ms)
    }

    pub(crate) const fn from_valid(ms: i64) -> Self {
        Self(ms)
    }

    /// Returns the milliseconds since the calendar epoch.
    pub fn epoch_milliseconds(self) -> i64 {
        self.0
    }

    /// Returns the milliseconds since the Unix epoch.
    ///
    /// Instants inside an inserted leap second report the repeated Unix second.
    pub fn unix_epoch_milliseconds(self) -> i64 {
        unix_from_epoch(self.0)
    }

    /// Returns the year, day and beeps of this instant.
    pub fn decompose(self) -> Decomposition {
        decompose(self.0)
    }

    /// Returns the year containing this instant.
    pub fn year(self) -> Year {
        self.decompose().year()
    }

    /// Returns the day containing this instant.
    pub fn day(self) -> Day {
        self.decompose().day()
    }

    /// Returns the beeps elapsed since the start of the day.
    pub fn beeps(self) -> u16 {
        self.decompose().beeps()
    }
}

impl TryFrom<i64> for Instant {
    type Error = CalendarError;

    fn try_from(ms: i64) -> Result<Self, Self::Error> {
        Self::from_epoch_milliseconds(ms)
    }
}

impl From<Instant> for i64 {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format(*self))
    }
}
