//! Arithmetic Persian (Solar Hijri) calendar.
//!
//! Leap years follow a 2820-year grand cycle rather than any 4-year rule.
//! Years count from AP 1; there is no year 0. The first six months have 31
//! days, the next five 30, and Esfand has 29 (30 in leap years).

use crate::consts::{PERSIAN_CYCLE_DAYS, PERSIAN_CYCLE_YEARS, PERSIAN_EPOCH};
use crate::math::{clamp_field, ceil_div, floor_div, modulo};
use crate::{Date, JulianDay};

/// Year at which the arithmetic grand cycle is anchored
const CYCLE_BASE_YEAR: i64 = 474;
/// Day of year on which the seventh (first 30-day) month starts, counted from 1
const FIRST_HALF_DAYS: i64 = 186;

/// True if `year` is a leap year of the 2820-year cycle.
pub const fn is_leap(year: i64) -> bool {
    let offset = if year > 0 { CYCLE_BASE_YEAR } else { CYCLE_BASE_YEAR - 1 };
    let cycle_year = modulo(modulo(year, PERSIAN_CYCLE_YEARS) - offset, PERSIAN_CYCLE_YEARS)
        + CYCLE_BASE_YEAR;
    modulo((cycle_year + 38) * 682, 2816) < 682
}

/// Number of days in `month` of `year`; 0 for months outside `1..=12`.
pub const fn month_days(year: i64, month: i64) -> i64 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Converts a Persian date to the Julian Day of its midnight.
pub fn to_jdn(year: i64, month: i64, day: i64) -> JulianDay {
    JulianDay::from_day_number(day_number(
        clamp_field(year),
        clamp_field(month),
        clamp_field(day),
    ))
}

/// Converts a Julian Day to the Persian date containing it.
pub fn from_jdn(jd: JulianDay) -> Date {
    let wjd = jd.day_number();
    let depoch = wjd - day_number(CYCLE_BASE_YEAR + 1, 1, 1);
    let cycle = floor_div(depoch, PERSIAN_CYCLE_DAYS);
    let cyear = modulo(depoch, PERSIAN_CYCLE_DAYS);

    // The general formula yields 2821 on the last day of the grand cycle.
    let ycycle = if cyear == PERSIAN_CYCLE_DAYS - 1 {
        tracing::trace!(cycle, "last day of a persian grand cycle");
        PERSIAN_CYCLE_YEARS
    } else {
        let aux1 = floor_div(cyear, 366);
        let aux2 = modulo(cyear, 366);
        floor_div(aux1 * 2134 + aux2 * 2816 + 2815, 1_028_522) + aux1 + 1
    };

    let mut year = ycycle + cycle * PERSIAN_CYCLE_YEARS + CYCLE_BASE_YEAR;
    if year <= 0 {
        year -= 1;
    }

    let yday = wjd - day_number(year, 1, 1) + 1;
    let month = if yday <= FIRST_HALF_DAYS {
        ceil_div(yday, 31)
    } else {
        ceil_div(yday - 6, 30)
    };
    let day = wjd - day_number(year, month, 1) + 1;

    Date::new(year, month, day)
}

fn day_number(year: i64, month: i64, day: i64) -> i64 {
    let epbase = year - if year >= 0 { CYCLE_BASE_YEAR } else { CYCLE_BASE_YEAR - 1 };
    let epyear = modulo(epbase, PERSIAN_CYCLE_YEARS) + CYCLE_BASE_YEAR;
    let month_offset = if month <= 7 {
        (month - 1) * 31
    } else {
        (month - 1) * 30 + 6
    };

    day + month_offset
        + floor_div(epyear * 682 - 110, 2816)
        + (epyear - 1) * 365
        + floor_div(epbase, PERSIAN_CYCLE_YEARS) * PERSIAN_CYCLE_DAYS
        + PERSIAN_EPOCH.day_number()
        - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{dates_in_years, ymd};

    #[test]
    fn test_leap_years_of_the_arithmetic_cycle() {
        let early: Vec<i64> = (1..=33).filter(|&y| is_leap(y)).collect();
        assert_eq!(early, vec![4, 8, 12, 16, 20, 25, 29, 33]);

        let modern: Vec<i64> = (1380..=1410).filter(|&y| is_leap(y)).collect();
        assert_eq!(modern, vec![1383, 1387, 1391, 1395, 1399, 1404, 1408]);
    }

    #[test]
    fn test_leap_cycle_repeats_every_2820_years() {
        for year in (1..=3000).step_by(7) {
            assert_eq!(is_leap(year), is_leap(year + 2820), "AP {year}");
        }
        let per_cycle = (475..475 + 2820).filter(|&y| is_leap(y)).count();
        assert_eq!(per_cycle, 683);
    }

    #[test]
    fn test_known_dates() {
        struct TestCase {
            date:        (i64, i64, i64),
            jd:          f64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        (1, 1, 1),
                jd:          1_948_320.5,
                description: "epoch",
            },
            TestCase {
                date:        (1378, 10, 11),
                jd:          2_451_544.5,
                description: "Gregorian 2000-01-01",
            },
            TestCase {
                date:        (1401, 12, 6),
                jd:          2_460_000.5,
                description: "Gregorian 2023-02-25",
            },
            TestCase {
                date:        (1402, 12, 29),
                jd:          2_460_388.5,
                description: "last day of a common year",
            },
            TestCase {
                date:        (1403, 1, 1),
                jd:          2_460_389.5,
                description: "Nowruz 2024-03-20",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(to_jdn(y, m, d).get(), case.jd, "forward: {}", case.description);
            assert_eq!(
                from_jdn(JulianDay::new(case.jd)),
                ymd(y, m, d),
                "inverse: {}",
                case.description
            );
        }
        assert_eq!(to_jdn(1, 1, 1), PERSIAN_EPOCH);
    }

    #[test]
    fn test_last_day_of_grand_cycle() {
        struct TestCase {
            jd:       f64,
            expected: (i64, i64, i64),
        }

        // Each of these lands on remainder 1029982 of its grand cycle.
        let cases = [
            TestCase {
                jd:       2_121_444.5,
                expected: (474, 12, 30),
            },
            TestCase {
                jd:       3_151_427.5,
                expected: (3294, 12, 30),
            },
            TestCase {
                jd:       4_181_410.5,
                expected: (6114, 12, 30),
            },
        ];

        let start = day_number(CYCLE_BASE_YEAR + 1, 1, 1);
        for case in &cases {
            let jd = JulianDay::new(case.jd);
            assert_eq!(
                modulo(jd.day_number() - start, PERSIAN_CYCLE_DAYS),
                PERSIAN_CYCLE_DAYS - 1
            );
            let (y, m, d) = case.expected;
            assert_eq!(from_jdn(jd), ymd(y, m, d), "JD {}", case.jd);
            assert_eq!(from_jdn(jd + 1), ymd(y + 1, 1, 1), "day after JD {}", case.jd);
        }
    }

    #[test]
    fn test_month_boundary_between_halves() {
        assert_eq!(from_jdn(to_jdn(1402, 6, 31)), ymd(1402, 6, 31));
        assert_eq!(from_jdn(to_jdn(1402, 7, 1)), ymd(1402, 7, 1));
        assert_eq!(to_jdn(1402, 7, 1) - to_jdn(1402, 6, 31), 1.0);
    }

    #[test]
    fn test_round_trip_every_day() {
        let years = (-1500..=3500).filter(|&y| y != 0);
        let mut previous = None;
        for date in dates_in_years(years, month_days) {
            let jd = to_jdn(date.year, date.month, date.day);
            assert_eq!(from_jdn(jd), date, "round trip of {date}");
            if let Some(prev) = previous {
                assert_eq!(jd - prev, 1.0, "{date} does not follow the previous day");
            }
            previous = Some(jd);
        }
    }
}
