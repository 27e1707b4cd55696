//! The result of a three-way comparison.

use std::cmp::Ordering;
use std::fmt;

use crate::maybe::Maybe;

/// The outcome of comparing two values with the Ord engine.
///
/// Besides the usual three outcomes, a comparison can be
/// [`Incomparable`](Comparison::Incomparable): the two values belong to
/// kinds that have no order between them (text against a number, a boolean
/// against anything). Callers decide what that means; [`to_ordering`]
/// treats it as a neutral `Equal`, [`ord::try_compare`] turns it into an
/// error.
///
/// [`to_ordering`]: Comparison::to_ordering
/// [`ord::try_compare`]: crate::ord::try_compare
///
/// # Examples
///
/// ```rust
/// use fp_prelude::ord::{self, Comparison, Value};
///
/// assert_eq!(ord::compare(&1, &2), Comparison::Less);
/// assert_eq!(ord::compare(&Value::from(1), &Value::from("a")), Comparison::Incomparable);
/// assert_eq!(ord::compare(&1, &2).signum(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparison {
    /// The left value sorts first.
    Less,
    /// Neither value sorts first.
    Equal,
    /// The right value sorts first.
    Greater,
    /// The values have no order between them.
    Incomparable,
}

impl Comparison {
    /// Collapses the comparison into an [`Ordering`], treating
    /// `Incomparable` as `Equal`.
    #[inline]
    #[must_use]
    pub const fn to_ordering(self) -> Ordering {
        match self {
            Self::Less => Ordering::Less,
            Self::Greater => Ordering::Greater,
            Self::Equal | Self::Incomparable => Ordering::Equal,
        }
    }

    /// Returns the ordering, or `Nothing` for `Incomparable`.
    #[inline]
    #[must_use]
    pub const fn to_maybe(self) -> Maybe<Ordering> {
        match self {
            Self::Less => Maybe::Just(Ordering::Less),
            Self::Equal => Maybe::Just(Ordering::Equal),
            Self::Greater => Maybe::Just(Ordering::Greater),
            Self::Incomparable => Maybe::Nothing,
        }
    }

    /// The classic comparator view: `-1`, `0` or `1`.
    ///
    /// `Incomparable` maps to `0`.
    #[inline]
    #[must_use]
    pub const fn signum(self) -> i32 {
        match self {
            Self::Less => -1,
            Self::Equal | Self::Incomparable => 0,
            Self::Greater => 1,
        }
    }

    /// Returns `true` for `Less`.
    #[inline]
    #[must_use]
    pub const fn is_lt(self) -> bool {
        matches!(self, Self::Less)
    }

    /// Returns `true` for `Equal`.
    #[inline]
    #[must_use]
    pub const fn is_eq(self) -> bool {
        matches!(self, Self::Equal)
    }

    /// Returns `true` for `Greater`.
    #[inline]
    #[must_use]
    pub const fn is_gt(self) -> bool {
        matches!(self, Self::Greater)
    }

    /// Returns `true` for `Incomparable`.
    #[inline]
    #[must_use]
    pub const fn is_incomparable(self) -> bool {
        matches!(self, Self::Incomparable)
    }

    /// Swaps `Less` and `Greater`.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            other => other,
        }
    }

    /// Returns `self` unless it is `Equal`, in which case `other`.
    #[inline]
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        match self {
            Self::Equal => other,
            _ => self,
        }
    }

    /// Returns `self` unless it is `Equal`, in which case the result of
    /// `function`.
    #[inline]
    #[must_use]
    pub fn then_with<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Equal => function(),
            _ => self,
        }
    }
}

impl From<Ordering> for Comparison {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Option<Ordering>> for Comparison {
    #[inline]
    fn from(ordering: Option<Ordering>) -> Self {
        ordering.map_or(Self::Incomparable, Self::from)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Less => "less",
            Self::Equal => "equal",
            Self::Greater => "greater",
            Self::Incomparable => "incomparable",
        };
        formatter.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Comparison::Less, -1)]
    #[case(Comparison::Equal, 0)]
    #[case(Comparison::Greater, 1)]
    #[case(Comparison::Incomparable, 0)]
    fn test_signum(#[case] comparison: Comparison, #[case] expected: i32) {
        assert_eq!(comparison.signum(), expected);
    }

    #[rstest]
    fn test_incomparable_is_neutral_ordering() {
        assert_eq!(Comparison::Incomparable.to_ordering(), Ordering::Equal);
        assert_eq!(Comparison::Incomparable.to_maybe(), Maybe::Nothing);
    }

    #[rstest]
    fn test_then_keeps_incomparable() {
        assert_eq!(
            Comparison::Incomparable.then(Comparison::Less),
            Comparison::Incomparable
        );
        assert_eq!(Comparison::Equal.then(Comparison::Less), Comparison::Less);
    }

    #[rstest]
    fn test_from_partial_ordering() {
        assert_eq!(Comparison::from(1.0_f64.partial_cmp(&f64::NAN)), Comparison::Incomparable);
        assert_eq!(Comparison::from(1.0_f64.partial_cmp(&2.0)), Comparison::Less);
    }
}
