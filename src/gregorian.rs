//! Proleptic Gregorian calendar with astronomical year numbering (the year
//! before 1 is 0).

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS,
    DAYS_PER_YEAR, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_EPOCH,
    LEAP_YEAR_CYCLE, MARCH,
};
use crate::math::{clamp_field, floor_div, modulo};
use crate::{Date, JulianDay};

/// True iff `year` is divisible by 4 and either not a century or divisible by 400.
pub const fn is_leap(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// Months outside `1..=12` are not meaningful and yield 0.
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

/// Converts a Gregorian date to the Julian Day of its midnight.
pub fn to_jdn(year: i64, month: i64, day: i64) -> JulianDay {
    JulianDay::from_day_number(day_number(
        clamp_field(year),
        clamp_field(month),
        clamp_field(day),
    ))
}

/// Converts a Julian Day to the Gregorian date containing it.
pub fn from_jdn(jd: JulianDay) -> Date {
    let wjd = jd.day_number();
    let depoch = wjd - GREGORIAN_EPOCH.day_number();

    let quadricent = floor_div(depoch, DAYS_PER_400_YEARS);
    let dqc = modulo(depoch, DAYS_PER_400_YEARS);
    let cent = floor_div(dqc, DAYS_PER_100_YEARS);
    let dcent = modulo(dqc, DAYS_PER_100_YEARS);
    let quad = floor_div(dcent, DAYS_PER_4_YEARS);
    let dquad = modulo(dcent, DAYS_PER_4_YEARS);
    let yindex = floor_div(dquad, DAYS_PER_YEAR);

    let mut year =
        quadricent * GREGORIAN_CYCLE + cent * CENTURY_CYCLE + quad * LEAP_YEAR_CYCLE + yindex;
    // The last day of a 400- or 4-year cycle is day 366 of the previous year.
    if !(cent == 4 || yindex == 4) {
        year += 1;
    }

    let yearday = wjd - day_number(year, 1, 1);
    let leapadj = if wjd < day_number(year, MARCH, 1) {
        0
    } else if is_leap(year) {
        1
    } else {
        2
    };
    let month = floor_div((yearday + leapadj) * 12 + 373, 367);
    let day = wjd - day_number(year, month, 1) + 1;

    Date::new(year, month, day)
}

/// Day number (`⌊jd⌋`) of a Gregorian date.
pub(crate) fn day_number(year: i64, month: i64, day: i64) -> i64 {
    let y = year - 1;
    let correction = if month <= FEBRUARY {
        0
    } else if is_leap(year) {
        -1
    } else {
        -2
    };
    GREGORIAN_EPOCH.day_number() - 1
        + y * DAYS_PER_YEAR
        + floor_div(y, LEAP_YEAR_CYCLE)
        - floor_div(y, CENTURY_CYCLE)
        + floor_div(y, GREGORIAN_CYCLE)
        + floor_div(month * 367 - 362, 12)
        + correction
        + day
}
