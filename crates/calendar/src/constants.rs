//! Calendar shape and epoch constants.
//!
//! Every number that fixes the shape of the calendar lives here. The
//! decomposition, composition and formatting code only refer to these names.

/// Number of beeps in one day.
pub const BEEPS_PER_DAY: u16 = 10_000;

/// Duration of one beep in milliseconds.
pub const MS_PER_BEEP: i64 = 8_640;

/// Duration of one day in milliseconds.
pub const MS_PER_DAY: i64 = MS_PER_BEEP * BEEPS_PER_DAY as i64;

/// Number of days in one year.
pub const DAYS_PER_YEAR: u16 = 365;

/// Duration of one year in milliseconds.
pub const MS_PER_YEAR: i64 = MS_PER_DAY * DAYS_PER_YEAR as i64;

/// Largest year number that holds at least one addressable millisecond.
///
/// The final year may be partial: it ends at `i64::MAX` milliseconds.
pub const MAX_YEAR: u32 = (i64::MAX / MS_PER_YEAR) as u32 + 1;

/// Number of days holding at least one addressable millisecond in [`MAX_YEAR`].
pub const DAYS_IN_MAX_YEAR: u16 =
    ((i64::MAX - (MAX_YEAR as i64 - 1) * MS_PER_YEAR) / MS_PER_DAY) as u16 + 1;

/// Number of beeps starting at or before `i64::MAX` in the last day of [`MAX_YEAR`].
pub const BEEPS_IN_FINAL_DAY: u16 = ((i64::MAX % MS_PER_DAY) / MS_PER_BEEP) as u16 + 1;

/// Calendar-epoch milliseconds at the Unix epoch (1970-01-01T00:00:00Z).
///
/// The calendar epoch is the end of year 0 of the Lukashian calendar, the
/// December solstice of 3901 BCE. Calendar time counts every elapsed SI
/// second, so leap seconds inserted after 1970 are added on top of this
/// offset (see [`UNIX_MILLISECONDS_WITH_LEAP_SECOND`]).
pub const UNIX_EPOCH_OFFSET_MILLISECONDS: i64 = 185_208_761_225_352;

/// Unix timestamps (ms) at which a positive leap second has taken effect.
///
/// The leap second itself is the second immediately before each entry; Unix
/// time repeats it. Source: IERS Bulletin C, 1972-07-01 through 2017-01-01.
#[rustfmt::skip]
pub const UNIX_MILLISECONDS_WITH_LEAP_SECOND: [i64; 27] = [
    78_796_800_000,    94_694_400_000,    126_230_400_000,   157_766_400_000,
    189_302_400_000,   220_924_800_000,   252_460_800_000,   283_996_800_000,
    315_532_800_000,   362_793_600_000,   394_329_600_000,   425_865_600_000,
    489_024_000_000,   567_993_600_000,   631_152_000_000,   662_688_000_000,
    709_948_800_000,   741_484_800_000,   773_020_800_000,   820_454_400_000,
    867_715_200_000,   915_148_800_000,   1_136_073_600_000, 1_230_768_000_000,
    1_341_100_800_000, 1_435_708_800_000, 1_483_228_800_000,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_is_one_mean_solar_day() {
        assert_eq!(MS_PER_DAY, 86_400_000);
    }

    #[test]
    fn year_is_whole_days() {
        assert_eq!(MS_PER_YEAR % MS_PER_DAY, 0);
        assert_eq!(MS_PER_YEAR / MS_PER_DAY, i64::from(DAYS_PER_YEAR));
    }

    #[test]
    fn max_year_reaches_i64_max() {
        let start_of_max = i64::from(MAX_YEAR - 1) * MS_PER_YEAR;
        assert!(start_of_max > 0);
        assert!(i64::MAX - start_of_max < MS_PER_YEAR);
    }

    #[test]
    fn final_year_is_partial() {
        assert_eq!(MAX_YEAR, 292_471_209);
        assert_eq!(DAYS_IN_MAX_YEAR, 248);
        assert_eq!(BEEPS_IN_FINAL_DAY, 3_007);
        let final_day_start = i64::from(MAX_YEAR - 1) * MS_PER_YEAR
            + i64::from(DAYS_IN_MAX_YEAR - 1) * MS_PER_DAY;
        let last_beep_start = final_day_start + i64::from(BEEPS_IN_FINAL_DAY - 1) * MS_PER_BEEP;
        assert!(i64::MAX - last_beep_start < MS_PER_BEEP);
    }

    #[test]
    fn leap_seconds_strictly_increasing() {
        for pair in UNIX_MILLISECONDS_WITH_LEAP_SECOND.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn leap_seconds_fall_on_whole_seconds() {
        for &ts in &UNIX_MILLISECONDS_WITH_LEAP_SECOND {
            assert_eq!(ts % 1000, 0);
        }
    }
}
