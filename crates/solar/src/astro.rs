//! Astronomical building blocks: solstices, perihelia, mean solar day length
//! and the equation of time.
//!
//! All results are Julian Ephemeris Day milliseconds or plain milliseconds.
//! Floating-point rounding follows "round half up" throughout so that the
//! tables are reproducible bit for bit across implementations.

use std::f64::consts::PI;

/// Last year the precomputation accepts.
pub const MAX_SOLAR_YEAR: u32 = 7000;

/// Milliseconds in a Julian day of 86 400 SI seconds.
const MS_PER_JULIAN_DAY: f64 = 24.0 * 3600.0 * 1000.0;

/// Mean solar day length at year 5900 (2000 CE), in nanoseconds.
const MEAN_SOLAR_DAY_AT_YEAR_5900_NANOS: i64 = 86_400_002_000_000;

/// Lengthening of the mean solar day per century, in nanoseconds.
const CENTURIAL_INCREASE_NANOS: i64 = 1_700_000;

/// Mean solar day length at the calendar epoch, in nanoseconds.
const MEAN_SOLAR_DAY_AT_EPOCH_NANOS: i64 =
    MEAN_SOLAR_DAY_AT_YEAR_5900_NANOS - CENTURIAL_INCREASE_NANOS * 59;

/// Obliquity of the ecliptic used by the equation of time, in degrees.
const OBLIQUITY_DEGREES: f64 = 23.44;

// Periodic terms of the equinox/solstice correction (Meeus, Astronomical
// Algorithms, table 27.C).
#[rustfmt::skip]
const A: [f64; 24] = [
    485.0, 203.0, 199.0, 182.0, 156.0, 136.0, 77.0, 74.0, 70.0, 58.0, 52.0, 50.0,
    45.0, 44.0, 29.0, 18.0, 17.0, 16.0, 14.0, 12.0, 12.0, 12.0, 9.0, 8.0,
];
#[rustfmt::skip]
const B: [f64; 24] = [
    324.96, 337.23, 342.08, 27.85, 73.14, 171.52, 222.54, 296.72, 243.58, 119.81, 297.17, 21.02,
    247.54, 325.15, 60.93, 155.12, 288.79, 198.04, 199.76, 95.39, 287.11, 320.81, 227.73, 15.45,
];
#[rustfmt::skip]
const C: [f64; 24] = [
    1934.136, 32964.467, 20.186, 445267.112, 45036.886, 22518.443, 65928.934, 3034.906,
    9037.513, 33718.147, 150.678, 2281.226, 29929.562, 31555.956, 4443.417, 67555.328,
    4562.452, 62894.029, 31436.921, 14577.848, 31931.756, 34777.259, 1222.114, 16859.074,
];

/// Rounds to the nearest integer, ties toward positive infinity.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

fn degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

// Multiplies step by step; a single `* 86_400_000.0` can round differently.
fn jde_to_ms(jde: f64) -> i64 {
    round_half_up(jde * 24.0 * 3600.0 * 1000.0) as i64
}

/// Returns the December solstice that ends `year`, in JDE milliseconds.
///
/// Uses Meeus' mean-solstice polynomials (one for years before 4900, one
/// from 4900 on) followed by the 24-term periodic correction.
pub fn solstice_jde_ms(year: u32) -> i64 {
    let jde0 = if year < 4900 {
        let y = (f64::from(year) - 3900.0) / 1000.0;
        1721414.39987 + 365242.88257 * y - 0.00769 * y * y - 0.00933 * y * y * y
            - 0.00006 * y * y * y * y
    } else {
        let y = (f64::from(year) - 5900.0) / 1000.0;
        2451900.05952 + 365242.74049 * y - 0.06223 * y * y - 0.00823 * y * y * y
            + 0.00032 * y * y * y * y
    };

    let t = (jde0 - 2451545.0) / 36525.0;
    let w = t * 35999.373 - 2.47;
    let dl = 0.0334 * radians(w).cos() + 0.0007 * radians(2.0 * w).cos() + 1.0;

    let s: f64 = A
        .iter()
        .zip(B.iter())
        .zip(C.iter())
        .map(|((a, b), c)| a * radians(b + c * t).cos())
        .sum();

    let jde = jde0 + (0.00001 * s) / dl;
    jde_to_ms(jde)
}

/// Returns the perihelion of the Earth-Moon barycentre nearest the start
/// of `year`, in JDE milliseconds.
pub fn perihelion_jde_ms(year: u32) -> i64 {
    let k = round_half_up(0.99997 * (f64::from(year) - 5900.01));
    let jde = 2451547.507 + 365.2596358 * k + 0.0000000156 * k * k;
    jde_to_ms(jde)
}

/// Returns the length of the `day`-th mean solar day since the epoch
/// (1-based), in whole nanoseconds.
pub fn mean_solar_day_nanos(day: u64) -> i64 {
    let daily_increase = CENTURIAL_INCREASE_NANOS as f64 / (100.0 * 365.25);
    let length = MEAN_SOLAR_DAY_AT_EPOCH_NANOS as f64 + daily_increase * (day - 1) as f64;
    round_half_up(length) as i64
}

/// Returns the equation of time in milliseconds: apparent minus mean solar time.
///
/// Positive values mean the true sun runs ahead of the mean sun.
pub fn equation_of_time_ms(ms_since_solstice: i64, ms_since_perihelion: i64) -> i64 {
    let days_since_solstice = ms_since_solstice as f64 / MS_PER_JULIAN_DAY;
    let days_since_perihelion = ms_since_perihelion as f64 / MS_PER_JULIAN_DAY;

    let n = 360.0 / 365.24;
    let a = n * days_since_solstice;
    let b = a + 1.914 * radians(n * days_since_perihelion).sin();
    let c = (a - degrees((radians(b).tan() / radians(OBLIQUITY_DEGREES).cos()).atan())) / 180.0;
    let minutes = 720.0 * (c - round_half_up(c));
    round_half_up(minutes * 60.0 * 1000.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn round_half_up_ties() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(2.4), 2.0);
    }

    #[test]
    fn first_year_length() {
        let length = solstice_jde_ms(1) - solstice_jde_ms(0);
        assert_abs_diff_eq!(length as f64, 31_557_141_528.0, epsilon = 2.0);
    }

    #[test]
    fn solstice_2025() {
        // End of year 5925: the December solstice of 2025 CE.
        let relative = solstice_jde_ms(5925) - solstice_jde_ms(0);
        assert_abs_diff_eq!(relative as f64, 186_975_090_642_971.0, epsilon = 2.0);
    }

    #[test]
    fn tropical_year_is_about_365_2422_days() {
        for year in [3000, 4899, 4900, 5900, 6500] {
            let days = (solstice_jde_ms(year + 1) - solstice_jde_ms(year)) as f64 / MS_PER_JULIAN_DAY;
            assert_abs_diff_eq!(days, 365.2422, epsilon = 0.02);
        }
    }

    #[test]
    fn perihelia_are_one_anomalistic_year_apart() {
        for year in [100, 3000, 5925] {
            let days = (perihelion_jde_ms(year + 1) - perihelion_jde_ms(year)) as f64 / MS_PER_JULIAN_DAY;
            assert_abs_diff_eq!(days, 365.2596, epsilon = 0.01);
        }
    }

    #[test]
    fn perihelion_of_2026_follows_solstice_of_2025() {
        let gap = (perihelion_jde_ms(5926) - solstice_jde_ms(5925)) as f64 / MS_PER_JULIAN_DAY;
        assert!((10.0..16.0).contains(&gap), "gap {gap}");
    }

    #[test]
    fn mean_day_grows_linearly() {
        assert_eq!(mean_solar_day_nanos(1), MEAN_SOLAR_DAY_AT_EPOCH_NANOS);
        let century = (100.0 * 365.25) as u64;
        let grown = mean_solar_day_nanos(century + 1) - mean_solar_day_nanos(1);
        assert_abs_diff_eq!(grown as f64, CENTURIAL_INCREASE_NANOS as f64, epsilon = 1.0);
    }

    #[test]
    fn equation_of_time_stays_within_seventeen_minutes() {
        let limit = 17 * 60 * 1000;
        for day in 0..366_i64 {
            let ms = day * 86_400_000;
            let eot = equation_of_time_ms(ms, ms + 14 * 86_400_000);
            assert!(eot.abs() < limit, "day {day}: {eot} ms");
        }
    }

    #[test]
    fn equation_of_time_near_zero_at_december_solstice() {
        // Around the solstice the equation of time crosses zero within a few minutes.
        let eot = equation_of_time_ms(0, -14 * 86_400_000);
        assert!(eot.abs() < 5 * 60 * 1000, "{eot} ms");
    }
}
