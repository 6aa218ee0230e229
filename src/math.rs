//! Integer helpers with floor semantics.
//!
//! Every calendar formula in this crate is written against mathematical
//! floor division and modulo. Rust's `/` and `%` truncate toward zero, which
//! silently breaks the leap and postponement rules for negative operands, so
//! the conversions go through these helpers instead. All divisors used by the
//! crate are positive constants.

use crate::consts::MAX_FIELD;

/// `⌊a / b⌋` for `b > 0`.
#[inline]
pub(crate) const fn floor_div(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

/// `a mod b` in `0..b` for `b > 0`.
#[inline]
pub(crate) const fn modulo(a: i64, b: i64) -> i64 {
    a.rem_euclid(b)
}

/// `⌈a / b⌉` for `b > 0`.
#[inline]
pub(crate) const fn ceil_div(a: i64, b: i64) -> i64 {
    -(-a).div_euclid(b)
}

/// Limits a calendar field to `±MAX_FIELD` so no formula can overflow.
#[inline]
pub(crate) const fn clamp_field(value: i64) -> i64 {
    if value > MAX_FIELD {
        MAX_FIELD
    } else if value < -MAX_FIELD {
        -MAX_FIELD
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_div_cases() {
        struct TestCase {
            a:           i64,
            b:           i64,
            expected:    i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                a:           7,
                b:           2,
                expected:    3,
                description: "positive rounds down",
            },
            TestCase {
                a:           -7,
                b:           2,
                expected:    -4,
                description: "negative rounds toward negative infinity",
            },
            TestCase {
                a:           -8,
                b:           2,
                expected:    -4,
                description: "exact negative",
            },
            TestCase {
                a:           0,
                b:           19,
                expected:    0,
                description: "zero",
            },
        ];

        for case in &cases {
            assert_eq!(
                floor_div(case.a, case.b),
                case.expected,
                "floor_div({}, {}) ({})",
                case.a,
                case.b,
                case.description
            );
        }
    }

    #[test]
    fn test_modulo_is_never_negative() {
        assert_eq!(modulo(-1, 4), 3);
        assert_eq!(modulo(-16, 3), 2);
        assert_eq!(modulo(-4, 4), 0);
        assert_eq!(modulo(10, 7), 3);
        for a in -100..100 {
            let r = modulo(a, 7);
            assert!((0..7).contains(&r), "{a} mod 7 gave {r}");
            assert_eq!(floor_div(a, 7) * 7 + r, a, "division identity for {a}");
        }
    }

    #[test]
    fn test_clamp_field() {
        assert_eq!(clamp_field(2024), 2024);
        assert_eq!(clamp_field(-4713), -4713);
        assert_eq!(clamp_field(MAX_FIELD), MAX_FIELD);
        assert_eq!(clamp_field(i64::MAX), MAX_FIELD);
        assert_eq!(clamp_field(i64::MIN), -MAX_FIELD);
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(59, 2), 30);
        assert_eq!(ceil_div(58, 2), 29);
        assert_eq!(ceil_div(-59, 2), -29);
        assert_eq!(ceil_div(0, 2), 0);
        assert_eq!(ceil_div(186, 31), 6);
        assert_eq!(ceil_div(187, 31), 7);
    }
}
