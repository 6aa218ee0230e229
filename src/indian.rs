//! Indian Civil (Saka) calendar, anchored to the Gregorian calendar.
//!
//! Saka year `y` starts on 22 March of Gregorian year `y + 78`, or on
//! 21 March when that Gregorian year is a leap year. Caitra then has 31 days
//! instead of 30; Vaisakha through Bhadra have 31 days and Asvina through
//! Phalguna 30.
//!
//! Months outside `1..=12` are not rejected. They run through the same
//! arithmetic: month 0 lands before the start of the year and month 13 on
//! the first day of the next.

use crate::consts::{GREGORIAN_CYCLE, SAKA_NEW_YEAR_DAY, SAKA_OFFSET};
use crate::math::{clamp_field, modulo};
use crate::{Date, JulianDay, gregorian};

/// Number of 31-day months after Caitra
const LONG_MONTHS: i64 = 5;
/// Days from the end of Caitra to 1 January, which falls on Pausa 11
const CAITRA_TO_JANUARY: i64 = 31 * LONG_MONTHS + 30 * 3 + 10;

/// True if Caitra of `year` has 31 days, i.e. Gregorian `year + 78` is a leap year.
pub const fn is_leap(year: i64) -> bool {
    // The Gregorian rule repeats every 400 years.
    gregorian::is_leap(modulo(year, GREGORIAN_CYCLE) + SAKA_OFFSET)
}

/// Number of days in `month` of `year`; 0 for months outside `1..=12`.
pub const fn month_days(year: i64, month: i64) -> i64 {
    match month {
        1 if is_leap(year) => 31,
        1 => 30,
        2..=6 => 31,
        7..=12 => 30,
        _ => 0,
    }
}

/// Converts an Indian Civil date to the Julian Day of its midnight.
pub fn to_jdn(year: i64, month: i64, day: i64) -> JulianDay {
    JulianDay::from_day_number(day_number(
        clamp_field(year),
        clamp_field(month),
        clamp_field(day),
    ))
}

/// Converts a Julian Day to the Indian Civil date containing it.
pub fn from_jdn(jd: JulianDay) -> Date {
    let wjd = jd.day_number();
    let greg = gregorian::from_jdn(jd);
    let caitra = caitra_days(greg.year);
    let mut year = greg.year - SAKA_OFFSET;
    // Zero-based day of the Gregorian year
    let mut yday = wjd - gregorian::day_number(greg.year, 1, 1);

    if yday < SAKA_NEW_YEAR_DAY {
        // January to mid-March ends the preceding Saka year.
        year -= 1;
        yday += caitra + CAITRA_TO_JANUARY + SAKA_NEW_YEAR_DAY;
    }
    yday -= SAKA_NEW_YEAR_DAY;

    let (month, day) = if yday < caitra {
        (1, yday + 1)
    } else {
        let mday = yday - caitra;
        if mday < 31 * LONG_MONTHS {
            (mday / 31 + 2, mday % 31 + 1)
        } else {
            let mday = mday - 31 * LONG_MONTHS;
            (mday / 30 + 7, mday % 30 + 1)
        }
    };

    Date::new(year, month, day)
}

const fn caitra_days(gregorian_year: i64) -> i64 {
    if gregorian::is_leap(gregorian_year) {
        31
    } else {
        30
    }
}

fn day_number(year: i64, month: i64, day: i64) -> i64 {
    let gyear = year + SAKA_OFFSET;
    let leap = gregorian::is_leap(gyear);
    let start = gregorian::day_number(gyear, 3, if leap { 21 } else { 22 });

    if month == 1 {
        return start + day - 1;
    }

    let mut n = start + caitra_days(gyear) + (month - 2).min(LONG_MONTHS) * 31;
    if month >= 8 {
        n += (month - 7) * 30;
    }
    n + day - 1
}
