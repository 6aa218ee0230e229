//! Mayan calendars: the Long Count and the two cyclic calendars read from the
//! same day count, the 365-day Haab and the 260-day Tzolkin.
//!
//! All three are measured from the Long Count epoch 0.0.0.0.0 (GMT
//! correlation, JD 584282.5). Only the Long Count converts back to a Julian
//! Day; a Haab or Tzolkin date alone does not identify a day.

use crate::consts::{
    BAKTUN_DAYS, HAAB_DAYS, KATUN_DAYS, LONG_COUNT_SEPARATOR, MAYAN_COUNT_EPOCH, TUN_DAYS,
    UINAL_DAYS,
};
use crate::JulianDay;
use crate::math::{clamp_field, floor_div, modulo};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Yucatec names of the 18 Haab months and the closing 5-day Wayeb'
pub const HAAB_MONTHS: [&str; 19] = [
    "Pop", "Wo'", "Sip", "Sotz'", "Sek", "Xul", "Yaxkin", "Mol", "Ch'en", "Yax", "Zac", "Ceh",
    "Mac", "Kankin", "Muan", "Pax", "Kayab", "Kumk'u", "Wayeb'",
];

/// Yucatec names of the 20 Tzolkin days
pub const TZOLKIN_DAYS: [&str; 20] = [
    "Imix", "Ik'", "Ak'b'al", "K'an", "Chikchan", "Kimi", "Manik'", "Lamat", "Muluk", "Ok",
    "Chuwen", "Eb'", "B'en", "Ix", "Men", "Kib'", "Kab'an", "Etz'nab'", "Kawak", "Ajaw",
];

/// Haab position of the Long Count epoch: 8 Kumk'u (month 18, day 8)
const HAAB_EPOCH_OFFSET: i64 = 8 + (18 - 1) * 20;
/// Tzolkin name index of the epoch, 4 Ajaw, minus one
const TZOLKIN_NAME_OFFSET: i64 = 20 - 1;
/// Tzolkin number of the epoch, 4 Ajaw, minus one
const TZOLKIN_NUMBER_OFFSET: i64 = 4 - 1;

/// A Long Count date: a mixed-radix day count (20, 20, 18, 20, 20 days per
/// place from kin upward).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize,
)]
pub struct LongCount {
    pub baktun: i64,
    pub katun:  i64,
    pub tun:    i64,
    pub uinal:  i64,
    pub kin:    i64,
}

impl LongCount {
    pub const fn new(baktun: i64, katun: i64, tun: i64, uinal: i64, kin: i64) -> Self {
        Self {
            baktun,
            katun,
            tun,
            uinal,
            kin,
        }
    }

    /// Days since 0.0.0.0.0. Places beyond `±MAX_FIELD` count as that bound.
    pub const fn days(&self) -> i64 {
        clamp_field(self.baktun) * BAKTUN_DAYS
            + clamp_field(self.katun) * KATUN_DAYS
            + clamp_field(self.tun) * TUN_DAYS
            + clamp_field(self.uinal) * UINAL_DAYS
            + clamp_field(self.kin)
    }
}

impl fmt::Display for LongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = LONG_COUNT_SEPARATOR;
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.baktun, self.katun, self.tun, self.uinal, self.kin
        )
    }
}

/// A Haab date: month 1..=19 (19 is the 5-day Wayeb') and day 0..=19.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into, Serialize, Deserialize)]
pub struct Haab {
    pub month: i64,
    pub day:   i64,
}

impl Haab {
    /// Name of the month, or `None` outside `1..=19`.
    pub fn month_name(&self) -> Option<&'static str> {
        name_at(&HAAB_MONTHS, self.month)
    }
}

impl fmt::Display for Haab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month_name() {
            Some(name) => write!(f, "{} {name}", self.day),
            None => write!(f, "{} #{}", self.day, self.month),
        }
    }
}

/// A Tzolkin date: a number 1..=13 paired with one of 20 day names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into, Serialize, Deserialize)]
pub struct Tzolkin {
    pub number: i64,
    /// Day name index, 1..=20
    pub name:   i64,
}

impl Tzolkin {
    /// Name of the day, or `None` outside `1..=20`.
    pub fn day_name(&self) -> Option<&'static str> {
        name_at(&TZOLKIN_DAYS, self.name)
    }
}

impl fmt::Display for Tzolkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day_name() {
            Some(name) => write!(f, "{} {name}", self.number),
            None => write!(f, "{} #{}", self.number, self.name),
        }
    }
}

fn name_at(names: &[&'static str], one_based: i64) -> Option<&'static str> {
    usize::try_from(one_based - 1)
        .ok()
        .and_then(|i| names.get(i))
        .copied()
}

/// Converts a Long Count to the Julian Day of its midnight.
pub fn long_count_to_jdn(count: LongCount) -> JulianDay {
    JulianDay::from_day_number(MAYAN_COUNT_EPOCH.day_number() + count.days())
}

/// Converts a Julian Day to the Long Count of the day containing it.
pub fn jdn_to_long_count(jd: JulianDay) -> LongCount {
    let d = lcount(jd);
    let baktun = floor_div(d, BAKTUN_DAYS);
    let d = modulo(d, BAKTUN_DAYS);
    let katun = floor_div(d, KATUN_DAYS);
    let d = modulo(d, KATUN_DAYS);
    let tun = floor_div(d, TUN_DAYS);
    let d = modulo(d, TUN_DAYS);
    let uinal = floor_div(d, UINAL_DAYS);
    let kin = modulo(d, UINAL_DAYS);

    LongCount::new(baktun, katun, tun, uinal, kin)
}

/// Haab date of the day containing `jd`.
pub fn jdn_to_haab(jd: JulianDay) -> Haab {
    let day = modulo(lcount(jd) + HAAB_EPOCH_OFFSET, HAAB_DAYS);
    Haab {
        month: floor_div(day, 20) + 1,
        day:   modulo(day, 20),
    }
}

/// Tzolkin date of the day containing `jd`.
pub fn jdn_to_tzolkin(jd: JulianDay) -> Tzolkin {
    let lcount = lcount(jd);
    Tzolkin {
        number: modulo(lcount + TZOLKIN_NUMBER_OFFSET, 13) + 1,
        name:   modulo(lcount + TZOLKIN_NAME_OFFSET, 20) + 1,
    }
}

/// Days since the Long Count epoch.
fn lcount(jd: JulianDay) -> i64 {
    jd.day_number() - MAYAN_COUNT_EPOCH.day_number()
}
