use crate::consts::MAX_DAY_NUMBER;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A Julian Day Number: days elapsed since noon UTC, 24 November 4714 BC
/// (proleptic Gregorian).
///
/// The value is real-valued. Whole days start at midnight, so a date converted
/// by this crate always carries a `.5` fraction (`2451544.5` is 2000-01-01).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw Julian Day value. Any finite value is accepted.
    #[inline]
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    /// Returns the raw Julian Day value
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Integer count of the civil day containing this instant: `⌊jd − 0.5⌋`.
    ///
    /// Every inverse conversion reduces its input to this value first. The
    /// result is limited to `±MAX_DAY_NUMBER`; infinities map to the bounds
    /// and NaN to 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    #[inline]
    pub fn day_number(self) -> i64 {
        let limit = MAX_DAY_NUMBER as f64;
        (self.0 - 0.5).floor().clamp(-limit, limit) as i64
    }

    /// The midnight that starts day number `n`, i.e. `n + 0.5`.
    #[allow(clippy::cast_precision_loss)]
    #[inline]
    pub const fn from_day_number(n: i64) -> Self {
        Self(n as f64 + 0.5)
    }

    /// Normalizes to the start of the civil day: `⌊jd − 0.5⌋ + 0.5`.
    #[inline]
    pub fn midnight(self) -> Self {
        Self::from_day_number(self.day_number())
    }
}

impl Add<i64> for JulianDay {
    type Output = Self;

    #[allow(clippy::cast_precision_loss)]
    fn add(self, days: i64) -> Self::Output {
        Self(self.0 + days as f64)
    }
}

impl Sub<i64> for JulianDay {
    type Output = Self;

    #[allow(clippy::cast_precision_loss)]
    fn sub(self, days: i64) -> Self::Output {
        Self(self.0 - days as f64)
    }
}

impl Sub for JulianDay {
    type Output = f64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}
