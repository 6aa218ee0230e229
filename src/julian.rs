//! Julian calendar with historical year numbering: 1 BC (`-1`) is followed
//! directly by AD 1, there is no year 0.
//!
//! Conversions follow Meeus, *Astronomical Algorithms*, chapter 7, with the
//! calendar's fractional constants (365.25, 30.6001, 122.1) carried as exact
//! rationals.

use crate::consts::{DAYS_IN_MONTH, DAYS_PER_4_YEARS, FEBRUARY, FEBRUARY_DAYS_LEAP, LEAP_YEAR_CYCLE};
use crate::math::{clamp_field, floor_div, modulo};
use crate::{Date, JulianDay};

/// Year offset placing 4716 BC at the start of Meeus' count
const MEEUS_YEAR_OFFSET: i64 = 4_716;
/// Day offset of Meeus' formula, shifted by half a day to land on a day number
const MEEUS_DAY_OFFSET: i64 = 1_525;
/// 30.6001 scaled by `MONTH_SCALE`
const MONTH_LENGTH_SCALED: i64 = 306_001;
const MONTH_SCALE: i64 = 10_000;

/// True for every fourth year. Because there is no year 0, the leap years
/// before AD 1 are 1 BC, 5 BC, 9 BC, ... (`year mod 4 == 3`).
pub const fn is_leap(year: i64) -> bool {
    modulo(year, LEAP_YEAR_CYCLE) == if year > 0 { 0 } else { 3 }
}

/// Number of days in `month` of `year`; 0 for months outside `1..=12`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn month_days(year: i64, month: i64) -> i64 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    if month == FEBRUARY && is_leap(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Converts a Julian calendar date to the Julian Day of its midnight.
pub fn to_jdn(year: i64, month: i64, day: i64) -> JulianDay {
    JulianDay::from_day_number(day_number(
        clamp_field(year),
        clamp_field(month),
        clamp_field(day),
    ))
}

/// Converts a Julian Day to the Julian calendar date containing it.
pub fn from_jdn(jd: JulianDay) -> Date {
    let z = jd.day_number() + 1;
    let b = z + 1524;
    // c = ⌊(b − 122.1) / 365.25⌋
    let c = floor_div(b * 100 - 12_210, 36_525);
    let d = floor_div(c * DAYS_PER_4_YEARS, LEAP_YEAR_CYCLE);
    let e = floor_div((b - d) * MONTH_SCALE, MONTH_LENGTH_SCALED);

    let month = if e < 14 { e - 1 } else { e - 13 };
    let mut year = if month > 2 {
        c - MEEUS_YEAR_OFFSET
    } else {
        c - (MEEUS_YEAR_OFFSET - 1)
    };
    let day = b - d - floor_div(e * MONTH_LENGTH_SCALED, MONTH_SCALE);

    // Back from zero-based years to 1 BC = -1.
    if year < 1 {
        year -= 1;
    }

    Date::new(year, month, day)
}

pub(crate) const fn day_number(year: i64, month: i64, day: i64) -> i64 {
    let mut year = year;
    let mut month = month;

    // Zero-based year numbering for the arithmetic.
    if year < 1 {
        year += 1;
    }
    if month <= FEBRUARY {
        year -= 1;
        month += 12;
    }

    floor_div((year + MEEUS_YEAR_OFFSET) * DAYS_PER_4_YEARS, LEAP_YEAR_CYCLE)
        + floor_div((month + 1) * MONTH_LENGTH_SCALED, MONTH_SCALE)
        + day
        - MEEUS_DAY_OFFSET
}
