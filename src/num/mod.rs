//! Arithmetic in function form.
//!
//! Every function takes all of its operands, so `add(x, 0)` is simply `x`.
//!
//! ```rust
//! use fp_prelude::num;
//!
//! assert_eq!(num::add(2, 0), 2);
//! assert_eq!(num::sqrt(9.0), 3.0);
//! assert!(num::is_even(-4));
//! ```

use std::ops::{Add, Mul, Rem, Sub};

/// `left + right`.
#[inline]
#[must_use]
pub fn add<T: Add<Output = T>>(left: T, right: T) -> T {
    left + right
}

/// `left - right`.
#[inline]
#[must_use]
pub fn sub<T: Sub<Output = T>>(left: T, right: T) -> T {
    left - right
}

/// `left * right`.
#[inline]
#[must_use]
pub fn mul<T: Mul<Output = T>>(left: T, right: T) -> T {
    left * right
}

/// Square root. Negative input gives `NaN`.
#[inline]
#[must_use]
pub fn sqrt(value: f64) -> f64 {
    value.sqrt()
}

/// Returns `true` if `value` is divisible by two.
#[inline]
#[must_use]
pub fn is_even<T>(value: T) -> bool
where
    T: Rem<Output = T> + PartialEq + From<u8>,
{
    value % T::from(2) == T::from(0)
}

/// Restricts `value` to the range `low..=high`.
///
/// ```rust
/// use fp_prelude::num;
///
/// assert_eq!(num::clamp(0, 10, 15), 10);
/// assert_eq!(num::clamp(0, 10, -3), 0);
/// assert_eq!(num::clamp(0, 10, 7), 7);
/// ```
#[must_use]
pub fn clamp<T: PartialOrd>(low: T, high: T, value: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(-3, false)]
    #[case(10, true)]
    fn test_is_even(#[case] value: i64, #[case] expected: bool) {
        assert_eq!(is_even(value), expected);
    }

    #[rstest]
    fn test_zero_operands_are_not_skipped() {
        assert_eq!(add(5, 0), 5);
        assert_eq!(sub(0, 5), -5);
        assert_eq!(mul(5, 0), 0);
    }

    #[rstest]
    fn test_sqrt_of_negative_is_nan() {
        assert!(sqrt(-1.0).is_nan());
    }
}
