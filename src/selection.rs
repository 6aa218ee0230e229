//! Numeric dispatch over every conversion, keyed by a selection code.
//!
//! Callers that only deal in plain numbers (a spreadsheet cell, a numeric
//! host language) pass a code and a flat operand list and get a flat list of
//! values back. Calendar fields must be whole numbers; a Julian Day operand
//! may carry any finite fraction. Field ranges are not checked, so month 13
//! converts like every other month.
//!
//! | Code | Operands | Values |
//! |---|---|---|
//! | 0, 2, 4, 6, 8, 12 | year, month, day | JD |
//! | 1, 3, 5, 7, 9, 13 | JD | year, month, day |
//! | 10 | baktun, katun, tun, uinal, kin | JD |
//! | 11 | JD | Long Count (5), Haab month and day, Tzolkin number and name |

use crate::mayan::{self, LongCount};
use crate::prelude::*;
use crate::{Date, JulianDay, gregorian, hebrew, indian, islamic, julian, persian};

/// Largest magnitude accepted for any operand; keeps the integer arithmetic
/// of every calendar clear of overflow.
pub const MAX_OPERAND: f64 = 1e9;

/// One conversion, identified by its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Selection {
    GregorianToJdn,
    JdnToGregorian,
    JulianToJdn,
    JdnToJulian,
    HebrewToJdn,
    JdnToHebrew,
    IslamicToJdn,
    JdnToIslamic,
    PersianToJdn,
    JdnToPersian,
    MayanToJdn,
    JdnToMayan,
    IndianCivilToJdn,
    JdnToIndianCivil,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    /// Code outside `0..=13`, or not a whole number.
    #[error("Unknown selection code: {0}")]
    UnknownSelection(f64),

    #[error("{selection} takes {expected} operands, found {found}")]
    OperandCount {
        selection: Selection,
        expected:  usize,
        found:     usize,
    },

    #[error("Operand {index} is not a finite number")]
    NonFinite { index: usize },

    #[error("Operand {index} must be a whole number, found {value}")]
    NonIntegral { index: usize, value: f64 },

    #[error("Operand {index} is out of range: {value} (magnitude must not exceed {max})", max = MAX_OPERAND)]
    OutOfRange { index: usize, value: f64 },
}

impl TryFrom<i64> for Selection {
    type Error = SelectionError;

    #[allow(clippy::cast_precision_loss)]
    fn try_from(code: i64) -> Result<Self, Self::Error> {
        let selection = match code {
            0 => Self::GregorianToJdn,
            1 => Self::JdnToGregorian,
            2 => Self::JulianToJdn,
            3 => Self::JdnToJulian,
            4 => Self::HebrewToJdn,
            5 => Self::JdnToHebrew,
            6 => Self::IslamicToJdn,
            7 => Self::JdnToIslamic,
            8 => Self::PersianToJdn,
            9 => Self::JdnToPersian,
            10 => Self::MayanToJdn,
            11 => Self::JdnToMayan,
            12 => Self::IndianCivilToJdn,
            13 => Self::JdnToIndianCivil,
            _ => return Err(SelectionError::UnknownSelection(code as f64)),
        };
        Ok(selection)
    }
}

impl Selection {
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Number of operands the conversion takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::GregorianToJdn
            | Self::JulianToJdn
            | Self::HebrewToJdn
            | Self::IslamicToJdn
            | Self::PersianToJdn
            | Self::IndianCivilToJdn => 3,
            Self::MayanToJdn => 5,
            Self::JdnToGregorian
            | Self::JdnToJulian
            | Self::JdnToHebrew
            | Self::JdnToIslamic
            | Self::JdnToPersian
            | Self::JdnToMayan
            | Self::JdnToIndianCivil => 1,
        }
    }

    /// Runs the conversion on `operands`.
    ///
    /// # Errors
    /// Returns `SelectionError` if the operand count is wrong, or an operand
    /// is not finite, not whole where a calendar field is expected, or larger
    /// than [`MAX_OPERAND`].
    pub fn evaluate(self, operands: &[f64]) -> Result<Vec<f64>, SelectionError> {
        tracing::debug!(selection = %self, ?operands, "evaluating calendar selection");
        let result = self.dispatch(operands);
        if let Err(err) = &result {
            tracing::debug!(selection = %self, %err, "rejected operands");
        }
        result
    }

    fn dispatch(self, operands: &[f64]) -> Result<Vec<f64>, SelectionError> {
        match self {
            Self::GregorianToJdn => self.forward(operands, gregorian::to_jdn),
            Self::JdnToGregorian => self.inverse(operands, gregorian::from_jdn),
            Self::JulianToJdn => self.forward(operands, julian::to_jdn),
            Self::JdnToJulian => self.inverse(operands, julian::from_jdn),
            Self::HebrewToJdn => self.forward(operands, hebrew::to_jdn),
            Self::JdnToHebrew => self.inverse(operands, hebrew::from_jdn),
            Self::IslamicToJdn => self.forward(operands, islamic::to_jdn),
            Self::JdnToIslamic => self.inverse(operands, islamic::from_jdn),
            Self::PersianToJdn => self.forward(operands, persian::to_jdn),
            Self::JdnToPersian => self.inverse(operands, persian::from_jdn),
            Self::IndianCivilToJdn => self.forward(operands, indian::to_jdn),
            Self::JdnToIndianCivil => self.inverse(operands, indian::from_jdn),
            Self::MayanToJdn => {
                let [baktun, katun, tun, uinal, kin] = whole_numbers(self.take(operands)?)?;
                let count = LongCount::new(baktun, katun, tun, uinal, kin);
                Ok(vec![mayan::long_count_to_jdn(count).get()])
            }
            Self::JdnToMayan => {
                let jd = julian_day(self.take(operands)?)?;
                let count = mayan::jdn_to_long_count(jd);
                let haab = mayan::jdn_to_haab(jd);
                let tzolkin = mayan::jdn_to_tzolkin(jd);
                Ok(to_values(&[
                    count.baktun,
                    count.katun,
                    count.tun,
                    count.uinal,
                    count.kin,
                    haab.month,
                    haab.day,
                    tzolkin.number,
                    tzolkin.name,
                ]))
            }
        }
    }

    fn forward(
        self,
        operands: &[f64],
        to_jdn: fn(i64, i64, i64) -> JulianDay,
    ) -> Result<Vec<f64>, SelectionError> {
        let [year, month, day] = whole_numbers(self.take(operands)?)?;
        Ok(vec![to_jdn(year, month, day).get()])
    }

    fn inverse(
        self,
        operands: &[f64],
        from_jdn: fn(JulianDay) -> Date,
    ) -> Result<Vec<f64>, SelectionError> {
        let Date { year, month, day } = from_jdn(julian_day(self.take(operands)?)?);
        Ok(to_values(&[year, month, day]))
    }

    fn take<const N: usize>(self, operands: &[f64]) -> Result<[f64; N], SelectionError> {
        <[f64; N]>::try_from(operands).map_err(|_| SelectionError::OperandCount {
            selection: self,
            expected:  N,
            found:     operands.len(),
        })
    }
}

/// Evaluates the conversion with numeric `code` on `operands`.
///
/// # Errors
/// Returns `SelectionError::UnknownSelection` if `code` is not a whole number
/// in `0..=13`, otherwise whatever [`Selection::evaluate`] returns.
#[allow(clippy::cast_possible_truncation)]
pub fn evaluate(code: f64, operands: &[f64]) -> Result<Vec<f64>, SelectionError> {
    if !code.is_finite() || code.fract() != 0.0 || code.abs() > MAX_OPERAND {
        tracing::debug!(code, "rejected selection code");
        return Err(SelectionError::UnknownSelection(code));
    }
    Selection::try_from(code as i64)?.evaluate(operands)
}

fn check(index: usize, value: f64) -> Result<f64, SelectionError> {
    if !value.is_finite() {
        return Err(SelectionError::NonFinite { index });
    }
    if value.abs() > MAX_OPERAND {
        return Err(SelectionError::OutOfRange { index, value });
    }
    Ok(value)
}

fn julian_day([value]: [f64; 1]) -> Result<JulianDay, SelectionError> {
    check(0, value).map(JulianDay::new)
}

#[allow(clippy::cast_possible_truncation)]
fn whole_numbers<const N: usize>(values: [f64; N]) -> Result<[i64; N], SelectionError> {
    let mut fields = [0; N];
    for (index, (field, value)) in fields.iter_mut().zip(values).enumerate() {
        let value = check(index, value)?;
        if value.fract() != 0.0 {
            return Err(SelectionError::NonIntegral { index, value });
        }
        *field = value as i64;
    }
    Ok(fields)
}

#[allow(clippy::cast_precision_loss)]
fn to_values(fields: &[i64]) -> Vec<f64> {
    fields.iter().map(|&v| v as f64).collect()
}
