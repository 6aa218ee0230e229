//! Conversions between calendar dates and Julian Day Numbers.
//!
//! Every calendar converts to and from a [`JulianDay`], which acts as the
//! common pivot: converting a Hebrew date to Persian means going through
//! `hebrew::to_jdn` then `persian::from_jdn`.
//!
//! Supported calendars:
//! - proleptic Gregorian ([`gregorian`], astronomical year numbering)
//! - Julian ([`julian`], no year 0)
//! - arithmetic Hebrew ([`hebrew`])
//! - tabular Islamic ([`islamic`])
//! - arithmetic Persian ([`persian`])
//! - Mayan Long Count, Haab and Tzolkin ([`mayan`])
//! - Indian Civil ([`indian`])
//!
//! Conversions are pure integer arithmetic and never fail. Out-of-range
//! fields are not rejected; they run through the same formulas and produce
//! whatever day those formulas land on. Magnitudes beyond [`MAX_FIELD`]
//! (fields) and [`MAX_DAY_NUMBER`] (Julian Days) are treated as those bounds,
//! so no input can overflow the arithmetic.
//!
//! ```
//! use calconv::{Calendar, Date, gregorian, hebrew};
//!
//! let jd = gregorian::to_jdn(2000, 1, 1);
//! assert_eq!(jd.get(), 2_451_544.5);
//! assert_eq!(hebrew::from_jdn(jd), Date::new(5760, 10, 23));
//! assert_eq!(Calendar::Persian.from_jdn(jd).to_string(), "1378-10-11");
//! ```

mod consts;
mod math;
mod prelude;
mod types;

pub mod gregorian;
pub mod hebrew;
pub mod indian;
pub mod islamic;
pub mod julian;
pub mod mayan;
pub mod persian;
pub mod selection;

#[cfg(test)]
mod test_utils;

pub use consts::{
    GREGORIAN_EPOCH, HEBREW_EPOCH, ISLAMIC_EPOCH, JULIAN_EPOCH, LONG_COUNT_SEPARATOR,
    MAX_DAY_NUMBER, MAX_FIELD, MAYAN_COUNT_EPOCH, PERSIAN_EPOCH,
};
pub use mayan::{Haab, LongCount, Tzolkin};
pub use selection::{Selection, SelectionError, evaluate};
pub use types::JulianDay;

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A year/month/day date in one of the supported calendars.
///
/// The calendar is not part of the value; the same triple means different
/// days depending on which module interprets it. Fields are not validated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct Date {
    pub year:  i64,
    pub month: i64,
    pub day:   i64,
}

impl Date {
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// The calendars that use year/month/day dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Calendar {
    Gregorian,
    Julian,
    Hebrew,
    Islamic,
    Persian,
    #[display(fmt = "Indian Civil")]
    IndianCivil,
}

impl Calendar {
    pub const ALL: [Self; 6] = [
        Self::Gregorian,
        Self::Julian,
        Self::Hebrew,
        Self::Islamic,
        Self::Persian,
        Self::IndianCivil,
    ];

    /// Julian Day of the midnight starting `date`.
    pub fn to_jdn(self, date: Date) -> JulianDay {
        let Date { year, month, day } = date;
        match self {
            Self::Gregorian => gregorian::to_jdn(year, month, day),
            Self::Julian => julian::to_jdn(year, month, day),
            Self::Hebrew => hebrew::to_jdn(year, month, day),
            Self::Islamic => islamic::to_jdn(year, month, day),
            Self::Persian => persian::to_jdn(year, month, day),
            Self::IndianCivil => indian::to_jdn(year, month, day),
        }
    }

    /// Date of the day containing `jd`.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_jdn(self, jd: JulianDay) -> Date {
        match self {
            Self::Gregorian => gregorian::from_jdn(jd),
            Self::Julian => julian::from_jdn(jd),
            Self::Hebrew => hebrew::from_jdn(jd),
            Self::Islamic => islamic::from_jdn(jd),
            Self::Persian => persian::from_jdn(jd),
            Self::IndianCivil => indian::from_jdn(jd),
        }
    }

    pub const fn is_leap(self, year: i64) -> bool {
        match self {
            Self::Gregorian => gregorian::is_leap(year),
            Self::Julian => julian::is_leap(year),
            Self::Hebrew => hebrew::is_leap(year),
            Self::Islamic => islamic::is_leap(year),
            Self::Persian => persian::is_leap(year),
            Self::IndianCivil => indian::is_leap(year),
        }
    }

    pub const fn months_in_year(self, year: i64) -> i64 {
        match self {
            Self::Hebrew => hebrew::months_in_year(year),
            _ => 12,
        }
    }

    /// Number of days in `month` of `year`, or 0 if the year has no such month.
    pub fn month_days(self, year: i64, month: i64) -> i64 {
        match self {
            Self::Gregorian => gregorian::month_days(year, month),
            Self::Julian => julian::month_days(year, month),
            Self::Hebrew => hebrew::month_days(year, month),
            Self::Islamic => islamic::month_days(year, month),
            Self::Persian => persian::month_days(year, month),
            Self::IndianCivil => indian::month_days(year, month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;

    #[test]
    fn test_date_display() {
        struct TestCase {
            date:        Date,
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        ymd(2000, 1, 1),
                expected:    "2000-01-01",
                description: "four-digit year",
            },
            TestCase {
                date:        ymd(622, 7, 16),
                expected:    "0622-07-16",
                description: "zero padded year",
            },
            TestCase {
                date:        ymd(-4713, 11, 24),
                expected:    "-4713-11-24",
                description: "negative year keeps its sign",
            },
        ];

        for case in &cases {
            assert_eq!(case.date.to_string(), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_date_tuple_conversions() {
        let date = Date::from((5784, 7, 1));
        assert_eq!(date, ymd(5784, 7, 1));
        let (y, m, d): (i64, i64, i64) = date.into();
        assert_eq!((y, m, d), (5784, 7, 1));
    }

    #[test]
    fn test_date_ordering() {
        assert!(ymd(1999, 12, 31) < ymd(2000, 1, 1));
        assert!(ymd(2000, 1, 31) < ymd(2000, 2, 1));
        assert!(ymd(-1, 12, 31) < ymd(1, 1, 1));
    }

    #[test]
    fn test_date_serde() {
        let date = ymd(1403, 1, 1);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":1403,"month":1,"day":1}"#);
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_calendars_agree_on_one_day() {
        struct TestCase {
            calendar: Calendar,
            date:     (i64, i64, i64),
        }

        // Gregorian 2000-01-01 in every calendar
        let jd = JulianDay::new(2_451_544.5);
        let cases = [
            TestCase {
                calendar: Calendar::Gregorian,
                date:     (2000, 1, 1),
            },
            TestCase {
                calendar: Calendar::Julian,
                date:     (1999, 12, 19),
            },
            TestCase {
                calendar: Calendar::Hebrew,
                date:     (5760, 10, 23),
            },
            TestCase {
                calendar: Calendar::Islamic,
                date:     (1420, 9, 24),
            },
            TestCase {
                calendar: Calendar::Persian,
                date:     (1378, 10, 11),
            },
            TestCase {
                calendar: Calendar::IndianCivil,
                date:     (1921, 10, 11),
            },
        ];

        for case in &cases {
            let date = Date::from(case.date);
            assert_eq!(case.calendar.from_jdn(jd), date, "{}", case.calendar);
            assert_eq!(case.calendar.to_jdn(date), jd, "{}", case.calendar);
        }
    }

    #[test]
    fn test_fractional_input_normalizes_to_midnight() {
        // Noon and a minute before the next midnight still belong to the same day
        for calendar in Calendar::ALL {
            let midnight = JulianDay::new(2_460_000.5);
            let expected = calendar.from_jdn(midnight);
            assert_eq!(calendar.from_jdn(JulianDay::new(2_460_001.0)), expected, "{calendar}");
            assert_eq!(calendar.from_jdn(JulianDay::new(2_460_001.499)), expected, "{calendar}");
            assert_eq!(calendar.to_jdn(expected), midnight, "{calendar}");
        }
    }

    #[test]
    fn test_months_in_year_and_month_days() {
        for calendar in Calendar::ALL {
            for year in [1, 1000, 1403, 1945, 2024, 5784] {
                let months = calendar.months_in_year(year);
                let total: i64 = (1..=months).map(|m| calendar.month_days(year, m)).sum();
                if calendar == Calendar::Hebrew {
                    // The Hebrew year starts in month 7.
                    assert_eq!(total, hebrew::year_days(year), "{calendar} {year}");
                } else {
                    let start = calendar.to_jdn(ymd(year, 1, 1));
                    let next = calendar.to_jdn(ymd(year + 1, 1, 1));
                    assert_eq!(start + total, next, "{calendar} {year}");
                }
                assert_eq!(calendar.month_days(year, months + 1), 0, "{calendar} {year}");
                assert_eq!(calendar.month_days(year, 0), 0, "{calendar} {year}");
            }
        }
        assert_eq!(Calendar::Hebrew.months_in_year(5784), 13);
        assert!(Calendar::Hebrew.is_leap(5784));
        assert!(Calendar::Gregorian.is_leap(2024));
        assert!(!Calendar::Julian.is_leap(2023));
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        let days = [1e18, -1e18, f64::INFINITY, f64::NEG_INFINITY, f64::NAN, f64::MAX, f64::MIN];
        let years = [i64::MAX, i64::MAX / 100, i64::MIN, i64::MIN / 100];

        for calendar in Calendar::ALL {
            for jd in days {
                calendar.from_jdn(JulianDay::new(jd));
            }
            // Far ends of the day number range still land in the right era.
            assert!(calendar.from_jdn(JulianDay::new(1e18)).year > 0, "{calendar}");
            assert!(calendar.from_jdn(JulianDay::new(-1e18)).year < 0, "{calendar}");
            for year in years {
                for (month, day) in [(1, 1), (12, 31), (i64::MAX, i64::MIN), (i64::MIN, i64::MAX)] {
                    let jd = calendar.to_jdn(ymd(year, month, day));
                    assert!(jd.get().is_finite(), "{calendar} {year}-{month}-{day}");
                }
                calendar.is_leap(year);
                calendar.months_in_year(year);
                calendar.month_days(year, 2);
                calendar.month_days(year, 12);
            }
        }

        for jd in days {
            let jd = JulianDay::new(jd);
            mayan::jdn_to_long_count(jd);
            mayan::jdn_to_haab(jd);
            mayan::jdn_to_tzolkin(jd);
        }
        let count = LongCount::new(i64::MAX, i64::MIN, i64::MAX, i64::MIN, i64::MAX);
        assert!(mayan::long_count_to_jdn(count).get().is_finite());
        hebrew::year_days(i64::MAX);
        hebrew::year_days(i64::MIN);
    }

    #[test]
    fn test_out_of_range_inputs_clamp_to_bounds() {
        assert_eq!(JulianDay::new(1e18).day_number(), MAX_DAY_NUMBER);
        assert_eq!(JulianDay::new(f64::NEG_INFINITY).day_number(), -MAX_DAY_NUMBER);
        assert_eq!(JulianDay::new(f64::NAN).day_number(), 0);
        assert_eq!(gregorian::to_jdn(i64::MAX, 1, 1), gregorian::to_jdn(MAX_FIELD, 1, 1));
        // Periodic leap rules give the exact answer for any year.
        assert_eq!(Calendar::Hebrew.is_leap(i64::MAX), hebrew::is_leap(i64::MAX % 19));
        assert_eq!(Calendar::Islamic.is_leap(i64::MAX), islamic::is_leap(i64::MAX % 30));
        assert_eq!(Calendar::Persian.is_leap(i64::MAX), persian::is_leap(i64::MAX % 2820 + 2820));
    }

    #[test]
    fn test_calendar_display() {
        assert_eq!(Calendar::Gregorian.to_string(), "Gregorian");
        assert_eq!(Calendar::IndianCivil.to_string(), "Indian Civil");
    }
}
