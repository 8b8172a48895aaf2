//! Sources of the current moment.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::trace;

use crate::error::CalendarError;
use crate::instant::Instant;

/// Capability for reading the current moment.
///
/// Pass a `Clock` to code that needs "now" instead of reading the host clock
/// directly, so tests can substitute a [`FixedClock`].
pub trait Clock: Send + Sync {
    /// Returns the current moment.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::ClockUnavailable`] if the moment cannot be read.
    fn now(&self) -> Result<Instant, CalendarError>;
}

/// Clock backed by the host's wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<Instant, CalendarError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| CalendarError::ClockUnavailable {
                reason: format!("system time is before the unix epoch: {e}"),
            })?;
        let unix_ms = i64::try_from(elapsed.as_millis()).map_err(|_| {
            CalendarError::ClockUnavailable {
                reason: format!("system time out of range: {elapsed:?} since the unix epoch"),
            }
        })?;
        trace!(unix_ms, "read system clock");
        Instant::from_unix_epoch_milliseconds(unix_ms).map_err(|e| {
            CalendarError::ClockUnavailable {
                reason: e.to_string(),
            }
        })
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Instant);

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    pub fn new(instant: Instant) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<Instant, CalendarError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        let now = SystemClock.now().unwrap();
        assert!(now.unix_epoch_milliseconds() > 1_577_836_800_000);
    }

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = Instant::from_epoch_milliseconds(42).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now().unwrap(), instant);
        assert_eq!(clock.now().unwrap(), instant);
    }

    #[test]
    fn clock_is_object_safe() {
        let clocks: Vec<Box<dyn Clock>> = vec![
            Box::new(SystemClock),
            Box::new(FixedClock::new(Instant::from_epoch_milliseconds(0).unwrap())),
        ];
        for clock in &clocks {
            assert!(clock.now().is_ok());
        }
    }
}
