use crate::types::JulianDay;

/// Day 1 of month 1, year 1 of the proleptic Gregorian calendar
pub const GREGORIAN_EPOCH: JulianDay = JulianDay::new(1_721_425.5);

/// Day 1 of month 1, year 1 of the Julian calendar
pub const JULIAN_EPOCH: JulianDay = JulianDay::new(1_721_423.5);

/// Molad BaHaRaD reference day; 1 Tishrei AM 1 falls two days later
pub const HEBREW_EPOCH: JulianDay = JulianDay::new(347_995.5);

/// 1 Muharram AH 1 (civil, Friday reckoning)
pub const ISLAMIC_EPOCH: JulianDay = JulianDay::new(1_948_439.5);

/// 1 Farvardin AP 1
pub const PERSIAN_EPOCH: JulianDay = JulianDay::new(1_948_320.5);

/// Long Count 0.0.0.0.0 (GMT correlation)
pub const MAYAN_COUNT_EPOCH: JulianDay = JulianDay::new(584_282.5);

/// Days in a 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in a Gregorian century without its final leap day
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days in a 4-year leap cycle
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Months in the Metonic cycle
pub(crate) const METONIC_MONTHS: i64 = 235;
/// Years in the Metonic cycle
pub(crate) const METONIC_YEARS: i64 = 19;
/// Halakim (parts) in one day
pub(crate) const PARTS_PER_DAY: i64 = 25_920;

/// Years in the Islamic intercalation cycle
pub(crate) const ISLAMIC_CYCLE_YEARS: i64 = 30;
/// Days in a common Islamic year
pub(crate) const ISLAMIC_YEAR_DAYS: i64 = 354;

/// Years in the Persian grand cycle
pub(crate) const PERSIAN_CYCLE_YEARS: i64 = 2_820;
/// Days in the Persian grand cycle
pub(crate) const PERSIAN_CYCLE_DAYS: i64 = 1_029_983;

/// Largest day number magnitude the conversions compute with; Julian Days
/// beyond it are treated as this bound (about 2.7 billion years from JD 0)
pub const MAX_DAY_NUMBER: i64 = 1_000_000_000_000_000;
/// Largest magnitude of a year, month, day or Long Count field; larger
/// fields are treated as this bound
pub const MAX_FIELD: i64 = 1_000_000_000_000;

/// Days per baktun
pub(crate) const BAKTUN_DAYS: i64 = 144_000;
/// Days per katun
pub(crate) const KATUN_DAYS: i64 = 7_200;
/// Days per tun
pub(crate) const TUN_DAYS: i64 = 360;
/// Days per uinal
pub(crate) const UINAL_DAYS: i64 = 20;
/// Days in the Haab year
pub(crate) const HAAB_DAYS: i64 = 365;

/// Years between the Saka era and the Gregorian year in which it begins
pub(crate) const SAKA_OFFSET: i64 = 78;
/// Zero-based day of the Gregorian year on which the Saka year begins
/// (22 March, or 21 March in leap years)
pub(crate) const SAKA_NEW_YEAR_DAY: i64 = 80;

/// Maximum days in each Gregorian/Julian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const DAYS_IN_MONTH: [i64; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month number for February
pub(crate) const FEBRUARY: i64 = 2;
/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: i64 = 29;
/// Month number for March, the first month after the leap day
pub(crate) const MARCH: i64 = 3;

/// Long Count component separator
pub const LONG_COUNT_SEPARATOR: char = '.';
