//! Conversion between Unix milliseconds and calendar-epoch milliseconds.
//!
//! Unix time skips every inserted leap second, calendar time does not. A
//! calendar millisecond is therefore `unix + 1000 * leap_seconds + offset`,
//! where `leap_seconds` counts the insertions at or before `unix`.

use crate::constants::{UNIX_EPOCH_OFFSET_MILLISECONDS, UNIX_MILLISECONDS_WITH_LEAP_SECOND};

const MS_PER_LEAP_SECOND: i64 = 1000;

/// Returns the number of leap seconds inserted at or before `unix_ms`.
pub fn leap_seconds_at_unix(unix_ms: i64) -> usize {
    UNIX_MILLISECONDS_WITH_LEAP_SECOND.partition_point(|&leap| leap <= unix_ms)
}

/// Converts Unix milliseconds to calendar-epoch milliseconds.
///
/// Returns `None` if the result does not fit in an `i64`. The result may be
/// negative for Unix times before the calendar epoch; callers decide whether
/// that is acceptable.
pub fn epoch_from_unix(unix_ms: i64) -> Option<i64> {
    let leap_ms = leap_seconds_at_unix(unix_ms) as i64 * MS_PER_LEAP_SECOND;
    unix_ms
        .checked_add(leap_ms)?
        .checked_add(UNIX_EPOCH_OFFSET_MILLISECONDS)
}

/// Converts calendar-epoch milliseconds back to Unix milliseconds.
///
/// Exact inverse of [`epoch_from_unix`] on its image. Calendar milliseconds
/// inside an inserted leap second have no Unix counterpart of their own; they
/// map onto the repeated Unix second preceding the insertion.
pub fn unix_from_epoch(epoch_ms: i64) -> i64 {
    let shifted = epoch_ms - UNIX_EPOCH_OFFSET_MILLISECONDS;
    // The k-th insertion occupies calendar time starting at `leap + k * 1000`.
    let inserted = UNIX_MILLISECONDS_WITH_LEAP_SECOND
        .iter()
        .enumerate()
        .take_while(|&(k, &leap)| leap + k as i64 * MS_PER_LEAP_SECOND <= shifted)
        .count();
    shifted - inserted as i64 * MS_PER_LEAP_SECOND
}
