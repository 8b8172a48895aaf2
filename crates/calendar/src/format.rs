//! Canonical text form of an instant: `<bbbb> <ddd>-<year>`.
//!
//! The beeps are zero-padded to four digits and the day to three, so
//! `"1203 011-5926"` reads as beep 1203 of day 11 of year 5926. The layout is
//! locale-independent and fixed.

use crate::decompose::compose;
use crate::error::CalendarError;
use crate::instant::Instant;

/// Formats an instant in the canonical layout.
///
/// # Example
///
/// ```
/// use lukashian_calendar::{format, Instant};
///
/// let epoch = Instant::from_epoch_milliseconds(0).unwrap();
/// assert_eq!(format(epoch), "0000 001-1");
/// ```
pub fn format(instant: Instant) -> String {
    let d = instant.decompose();
    format_parts(d.year().number(), d.day().number(), d.beeps())
}

/// Formats raw year, day and beep numbers in the canonical layout.
///
/// Shared with calendars whose years and days do not map onto [`Instant`]'s
/// fixed-length decomposition.
pub fn format_parts(year: u32, day: u16, beeps: u16) -> String {
    format!("{beeps:04} {day:03}-{year}")
}

/// Parses the canonical layout back into the instant at which that beep starts.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidFormat`] if `input` does not follow the
/// layout exactly, or the range errors of [`compose`] if a field is out of range.
pub fn parse(input: &str) -> Result<Instant, CalendarError> {
    let (year, day, beeps) = split_parts(input).ok_or_else(|| CalendarError::InvalidFormat {
        input: input.to_string(),
    })?;
    let ms = compose(year, day, beeps)?;
    Instant::from_epoch_milliseconds(ms)
}

fn split_parts(input: &str) -> Option<(u32, u16, u16)> {
    let (beeps, rest) = input.split_once(' ')?;
    let (day, year) = rest.split_once('-')?;
    if beeps.len() != 4 || !is_digits(beeps) || day.len() != 3 || !is_digits(day) {
        return None;
    }
    if year.is_empty() || year.starts_with('0') || !is_digits(year) {
        return None;
    }
    Some((year.parse().ok()?, day.parse().ok()?, beeps.parse().ok()?))
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DAYS_IN_MAX_YEAR, MAX_YEAR, MS_PER_DAY};

    #[test]
    fn format_epoch() {
        let instant = Instant::from_epoch_milliseconds(0).unwrap();
        assert_eq!(format(instant), "0000 001-1");
    }

    #[test]
    fn format_pads_day_and_beeps() {
        assert_eq!(format_parts(5926, 11, 3), "0003 011-5926");
        assert_eq!(format_parts(5926, 365, 9999), "9999 365-5926");
    }

    #[test]
    fn format_end_of_first_day() {
        let instant = Instant::from_epoch_milliseconds(MS_PER_DAY - 1).unwrap();
        assert_eq!(format(instant), "9999 001-1");
    }

    #[test]
    fn format_last_millisecond() {
        let instant = Instant::from_epoch_milliseconds(i64::MAX).unwrap();
        assert_eq!(format(instant), "3006 248-292471209");
    }

    #[test]
    fn parse_epoch() {
        assert_eq!(parse("0000 001-1").unwrap().epoch_milliseconds(), 0);
    }

    #[test]
    fn parse_roundtrip() {
        for s in [
            "0000 001-1",
            "1203 011-5926",
            "9999 365-42",
            "0001 200-292471208",
            "3006 248-292471209",
        ] {
            assert_eq!(format(parse(s).unwrap()), s);
        }
    }

    #[test]
    fn parse_rejects_malformed() {
        for s in [
            "", "0000 001", "0000-001-1", "0000 01-1", "000 001-1", "0000 001-01",
            "0000 001--1", " 0000 001-1", "0000 001-1 ", "0000 0a1-1", "0000 001-x",
            "0000 001-99999999999",
        ] {
            assert_eq!(
                parse(s).unwrap_err(),
                CalendarError::InvalidFormat {
                    input: s.to_string()
                },
                "accepted {s:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_out_of_range_fields() {
        assert!(matches!(
            parse("0000 001-0"),
            Err(CalendarError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse("0000 000-1"),
            Err(CalendarError::InvalidDay { day: 0, .. })
        ));
        assert!(matches!(
            parse("0000 366-1"),
            Err(CalendarError::InvalidDay { day: 366, .. })
        ));
    }

    #[test]
    fn parse_rejects_days_past_final_millisecond() {
        assert_eq!(
            parse(&format_parts(MAX_YEAR, 300, 0)).unwrap_err(),
            CalendarError::InvalidDay {
                day: 300,
                max_day: DAYS_IN_MAX_YEAR,
            }
        );
        assert!(matches!(
            parse("3007 248-292471209"),
            Err(CalendarError::InvalidBeeps { beeps: 3007, .. })
        ));
    }
}
