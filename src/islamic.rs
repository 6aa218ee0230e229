//! Arithmetic (tabular) Islamic calendar: 30-year cycle with 11 leap years,
//! months alternating 30 and 29 days, the last month gaining a day in leap
//! years.

use crate::consts::{ISLAMIC_CYCLE_YEARS, ISLAMIC_EPOCH, ISLAMIC_YEAR_DAYS};
use crate::math::{clamp_field, ceil_div, floor_div, modulo};
use crate::{Date, JulianDay};

/// True for years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 of each cycle.
pub const fn is_leap(year: i64) -> bool {
    modulo(modulo(year, ISLAMIC_CYCLE_YEARS) * 11 + 14, ISLAMIC_CYCLE_YEARS) < 11
}

/// Number of days in `month` of `year`; 0 for months outside `1..=12`.
pub const fn month_days(year: i64, month: i64) -> i64 {
    match month {
        12 if is_leap(year) => 30,
        1..=12 if month % 2 == 1 => 30,
        1..=12 => 29,
        _ => 0,
    }
}

/// Converts an Islamic date to the Julian Day of its midnight.
pub fn to_jdn(year: i64, month: i64, day: i64) -> JulianDay {
    JulianDay::from_day_number(day_number(
        clamp_field(year),
        clamp_field(month),
        clamp_field(day),
    ))
}

/// Converts a Julian Day to the Islamic date containing it.
pub fn from_jdn(jd: JulianDay) -> Date {
    let wjd = jd.day_number();
    let year = floor_div((wjd - ISLAMIC_EPOCH.day_number()) * 30 + 10_646, 10_631);
    // The estimate overshoots to 13 on the last day of a leap year.
    let month = (ceil_div((wjd - (day_number(year, 1, 1) + 29)) * 2, 59) + 1).min(12);
    let day = wjd - day_number(year, month, 1) + 1;

    Date::new(year, month, day)
}

fn day_number(year: i64, month: i64, day: i64) -> i64 {
    // ⌈(month − 1) · 29.5⌉
    day + ceil_div((month - 1) * 59, 2)
        + (year - 1) * ISLAMIC_YEAR_DAYS
        + floor_div(year * 11 + 3, ISLAMIC_CYCLE_YEARS)
        + ISLAMIC_EPOCH.day_number()
        - 1
}
