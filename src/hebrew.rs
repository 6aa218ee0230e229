//! Hebrew (arithmetic) calendar.
//!
//! Months are numbered from Nisan: Nisan = 1 ... Elul = 6, Tishrei = 7,
//! Heshvan = 8, Kislev = 9, Tevet = 10, Shevat = 11, Adar (Adar I in leap
//! years) = 12 and Adar II = 13. The year number changes on 1 Tishrei, so
//! months 7..=13 precede months 1..=6 within a year.
//!
//! The conversion is closed-form. Its building blocks, from the inside out:
//!
//! * `elapsed_days`: day of the molad of Tishrei, from the 235-month
//!   Metonic cycle and a molad length of 29d 13753p (25920 parts per day).
//! * `new_year_weekday_rule`: moves the new year off the forbidden weekdays.
//! * `molad_year_length`: year length implied by the previous step.
//! * `new_year`: applies the two remaining postponements, which depend on
//!   the length of the current and the previous year.
//! * `month_start`: day offset of a month, counted from Tishrei of the year
//!   it belongs to, corrected for deficient and complete years.
//!
//! Months before Tishrei are counted backwards from the *next* year's
//! 1 Tishrei, so the length of the current year only matters for months
//! after Heshvan.

use crate::consts::{HEBREW_EPOCH, METONIC_MONTHS, METONIC_YEARS, PARTS_PER_DAY};
use crate::math::{clamp_field, floor_div, modulo};
use crate::{Date, JulianDay};

/// Parts in a molad beyond its 29 whole days
const MOLAD_EXCESS_PARTS: i64 = 13_753;
/// Parts of the molad of Tishrei AM 1 (BaHaRaD), offset to the noon boundary
const MOLAD_BAHARAD_PARTS: i64 = 12_084;
/// Month number of Tishrei
const TISHREI: i64 = 7;
/// Days in a 19-year Metonic cycle, rounded down, used by the initial estimate
const CYCLE_DAYS_ESTIMATE: i64 = 33_783;

/// True if `year` has 13 months (years 3, 6, 8, 11, 14, 17 and 19 of the
/// Metonic cycle).
pub const fn is_leap(year: i64) -> bool {
    modulo(modulo(year, METONIC_YEARS) * 7 + 1, METONIC_YEARS) < 7
}

/// 12 for a common year, 13 for a leap year.
pub const fn months_in_year(year: i64) -> i64 {
    if is_leap(year) {
        13
    } else {
        12
    }
}

/// Length of `year` in days: one of 353, 354, 355, 383, 384 or 385.
pub fn year_days(year: i64) -> i64 {
    let year = clamp_field(year);
    new_year(year + 1) - new_year(year)
}

/// Number of days in `month` of `year`; 0 for a month the year does not have.
pub fn month_days(year: i64, month: i64) -> i64 {
    if !(1..=months_in_year(year)).contains(&month) {
        return 0;
    }

    match month {
        2 | 4 | 6 | 10 | 13 => 29,
        // Adar has 29 days unless Adar I of a leap year
        12 if !is_leap(year) => 29,
        // Heshvan has 30 days only in complete years
        8 if modulo(year_days(year), 10) != 5 => 29,
        // Kislev has 29 days only in deficient years
        9 if modulo(year_days(year), 10) == 3 => 29,
        _ => 30,
    }
}

/// Converts a Hebrew date to the Julian Day of its midnight.
pub fn to_jdn(year: i64, month: i64, day: i64) -> JulianDay {
    JulianDay::from_day_number(day_number(
        clamp_field(year),
        clamp_field(month),
        clamp_field(day),
    ))
}

/// Converts a Julian Day to the Hebrew date containing it.
///
/// The month index is estimated from the elapsed days, then corrected twice
/// against the forward formula. A single correction is not enough: on the
/// last day of some 29-day months it still lands on day 0 of the following
/// month.
pub fn from_jdn(jd: JulianDay) -> Date {
    let s = jd.day_number() - first_day() - 1;

    let w1 = floor_div(s, CYCLE_DAYS_ESTIMATE);
    let e1 = modulo(s, CYCLE_DAYS_ESTIMATE);
    let u3 = w1 * 1144 + floor_div(w1 * 8 + e1 * PARTS_PER_DAY + 13_835, 765_433) + 1;
    let u5 = refine(s, u3);
    let u7 = refine(s, u5);
    tracing::trace!(s, u3, u5, u7, "hebrew month estimates");

    let (a1, m1) = split_month_index(u7);
    let d0 = s - month_start(a1, m1);

    Date::new(a1 + floor_div(m1, 10), m1 + TISHREI, d0 + 1)
}

/// Day number of 1 Tishrei AM 1, minus one.
fn first_day() -> i64 {
    HEBREW_EPOCH.day_number() + 1
}

fn day_number(year: i64, month: i64, day: i64) -> i64 {
    let m1 = month - TISHREI;
    let a1 = year - floor_div(m1, 10);
    first_day() + month_start(a1, m1) + day
}

/// Splits a running month index into the Tishrei-based year it falls in and
/// the month offset from that year's Tishrei (`-6..=6`).
const fn split_month_index(u: i64) -> (i64, i64) {
    let x = u * METONIC_YEARS + 366;
    (
        floor_div(x, METONIC_MONTHS),
        floor_div(modulo(x, METONIC_MONTHS), METONIC_YEARS) - 6,
    )
}

/// One correction pass: moves the month index by the residual between the
/// target day and the start of the currently estimated month.
fn refine(s: i64, u: i64) -> i64 {
    let (a, m) = split_month_index(u);
    u + floor_div(s - month_start(a, m), 64)
}

/// Days from the epoch to the molad of Tishrei of `year`.
const fn elapsed_days(year: i64) -> i64 {
    let months = floor_div(year * METONIC_MONTHS - (METONIC_MONTHS - 1), METONIC_YEARS);
    let whole = floor_div(months, PARTS_PER_DAY);
    let rest = modulo(months, PARTS_PER_DAY);
    months * 29
        + whole * MOLAD_EXCESS_PARTS
        + floor_div(rest * MOLAD_EXCESS_PARTS + MOLAD_BAHARAD_PARTS, PARTS_PER_DAY)
}

/// Delays the new year by one day when it would fall on Sunday, Wednesday or
/// Friday.
const fn new_year_weekday_rule(year: i64) -> i64 {
    let days = elapsed_days(year);
    days + modulo(floor_div(modulo(days, 7) * 6, 7), 2)
}

const fn molad_year_length(year: i64) -> i64 {
    new_year_weekday_rule(year + 1) - new_year_weekday_rule(year)
}

/// Days from the epoch to 1 Tishrei of `year`.
///
/// A 356-day year pushes its own start two days later (a Tuesday molad must
/// skip Wednesday), and a year following a 382-day year starts one day later.
const fn new_year(year: i64) -> i64 {
    new_year_weekday_rule(year)
        + 2 * modulo(floor_div(molad_year_length(year) + 19, 15), 2)
        + modulo(floor_div(molad_year_length(year - 1) + 7, 15), 2)
}

/// Days from the epoch to the first of the month `m1` months after Tishrei
/// of `year`.
const fn month_start(year: i64, m1: i64) -> i64 {
    let length = new_year(year + 1) - new_year(year);
    // Heshvan gains a day in complete (355/385-day) years...
    let complete = modulo(floor_div(length + 1, 2), 3);
    // ...and Kislev loses one in deficient (353/383-day) years.
    let deficient = modulo(floor_div(385 - length, 2), 3);

    new_year(year) + floor_div(m1 * 384 + 10, 13) + complete * floor_div(m1 + 10, 12)
        - deficient * floor_div(m1 + 9, 12)
}
