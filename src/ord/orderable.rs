//! The `Orderable` trait and its implementations for built-in types.
//!
//! `Orderable` is the typed face of the Ord engine. It is implemented for
//! the scalar kinds (strings, numbers, dates), for 2-tuples and for
//! sequences (slices, arrays, `Vec`), recursively. Mixing kinds, such as
//! comparing a string to a number, does not type-check.
//!
//! # Ordering rules
//!
//! - Text: locale-style order. Letters compare case-insensitively first,
//!   then lowercase sorts before uppercase, then by code point.
//! - Numbers: numeric order. `NaN` is incomparable.
//! - Dates: by point in time.
//! - Sequences: an empty sequence sorts first. Otherwise the first elements
//!   decide, and when they tie the shorter sequence sorts first. Elements
//!   after the first are not consulted.
//! - Tuples: ordered as 2-element sequences, so only the first component
//!   decides.

use std::cmp::Ordering;

use super::comparison::Comparison;

/// Types that can be ordered by the Ord engine.
///
/// # Examples
///
/// ```rust
/// use fp_prelude::ord::{Comparison, Orderable};
///
/// assert_eq!("apple".compare("Banana"), Comparison::Less);
/// assert_eq!(vec![2, 1].compare(&vec![3]), Comparison::Less);
/// assert_eq!(vec![1].compare(&vec![1, 0]), Comparison::Less);
/// assert_eq!(Vec::<i32>::new().compare(&vec![0]), Comparison::Less);
/// ```
pub trait Orderable {
    /// Three-way comparison.
    fn compare(&self, other: &Self) -> Comparison;

    /// A total order used for sorting.
    ///
    /// Agrees with [`compare`](Orderable::compare) whenever that is not
    /// `Incomparable`, and orders incomparable values deterministically.
    fn total_order(&self, other: &Self) -> Ordering {
        self.compare(other).to_ordering()
    }

    /// Order-equivalence: `compare` returns `Equal`.
    ///
    /// Sequences override this to compare every element pairwise, so two
    /// sequences with the same head but different tails are not equivalent.
    fn equivalent(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}

// =============================================================================
// Sequence Ordering
// =============================================================================

/// Compares two sequences by their first element, then by length.
pub(crate) fn compare_by_head<T, F>(
    left: Option<&T>,
    left_length: usize,
    right: Option<&T>,
    right_length: usize,
    compare_heads: F,
) -> Comparison
where
    T: ?Sized,
    F: FnOnce(&T, &T) -> Comparison,
{
    match (left, right) {
        (None, None) => Comparison::Equal,
        (None, Some(_)) => Comparison::Less,
        (Some(_), None) => Comparison::Greater,
        (Some(left_head), Some(right_head)) => compare_heads(left_head, right_head)
            .then_with(|| Comparison::from(left_length.cmp(&right_length))),
    }
}

/// The total-order counterpart of [`compare_by_head`].
pub(crate) fn total_order_by_head<T, F>(
    left: Option<&T>,
    left_length: usize,
    right: Option<&T>,
    right_length: usize,
    order_heads: F,
) -> Ordering
where
    T: ?Sized,
    F: FnOnce(&T, &T) -> Ordering,
{
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left_head), Some(right_head)) => {
            order_heads(left_head, right_head).then_with(|| left_length.cmp(&right_length))
        }
    }
}

impl<T: Orderable> Orderable for [T] {
    fn compare(&self, other: &Self) -> Comparison {
        compare_by_head(self.first(), self.len(), other.first(), other.len(), T::compare)
    }

    fn total_order(&self, other: &Self) -> Ordering {
        total_order_by_head(
            self.first(),
            self.len(),
            other.first(),
            other.len(),
            T::total_order,
        )
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(left, right)| left.equivalent(right))
    }
}

impl<T: Orderable> Orderable for Vec<T> {
    fn compare(&self, other: &Self) -> Comparison {
        self.as_slice().compare(other.as_slice())
    }

    fn total_order(&self, other: &Self) -> Ordering {
        self.as_slice().total_order(other.as_slice())
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.as_slice().equivalent(other.as_slice())
    }
}

impl<T: Orderable, const N: usize> Orderable for [T; N] {
    fn compare(&self, other: &Self) -> Comparison {
        self.as_slice().compare(other.as_slice())
    }

    fn total_order(&self, other: &Self) -> Ordering {
        self.as_slice().total_order(other.as_slice())
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.as_slice().equivalent(other.as_slice())
    }
}

impl<A: Orderable, B: Orderable> Orderable for (A, B) {
    fn compare(&self, other: &Self) -> Comparison {
        self.0.compare(&other.0)
    }

    fn total_order(&self, other: &Self) -> Ordering {
        self.0.total_order(&other.0)
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.0.equivalent(&other.0) && self.1.equivalent(&other.1)
    }
}

impl<T: Orderable + ?Sized> Orderable for &T {
    fn compare(&self, other: &Self) -> Comparison {
        (**self).compare(*other)
    }

    fn total_order(&self, other: &Self) -> Ordering {
        (**self).total_order(*other)
    }

    fn equivalent(&self, other: &Self) -> bool {
        (**self).equivalent(*other)
    }
}

impl<T: Orderable + ?Sized> Orderable for Box<T> {
    fn compare(&self, other: &Self) -> Comparison {
        (**self).compare(&**other)
    }

    fn total_order(&self, other: &Self) -> Ordering {
        (**self).total_order(&**other)
    }

    fn equivalent(&self, other: &Self) -> bool {
        (**self).equivalent(&**other)
    }
}

// =============================================================================
// Text
// =============================================================================

/// Locale-style text order.
///
/// Case-insensitive first, then lowercase before uppercase at the first
/// position where only the case differs, then code point order.
fn locale_order(left: &str, right: &str) -> Ordering {
    let folded = left
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase));
    folded
        .then_with(|| {
            left.chars()
                .map(|character| !character.is_lowercase())
                .cmp(right.chars().map(|character| !character.is_lowercase()))
        })
        .then_with(|| left.cmp(right))
}

impl Orderable for str {
    fn compare(&self, other: &Self) -> Comparison {
        locale_order(self, other).into()
    }
}

impl Orderable for String {
    fn compare(&self, other: &Self) -> Comparison {
        self.as_str().compare(other.as_str())
    }
}

impl Orderable for char {
    fn compare(&self, other: &Self) -> Comparison {
        let mut left = [0; 4];
        let mut right = [0; 4];
        (*self.encode_utf8(&mut left)).compare(&*other.encode_utf8(&mut right))
    }
}

// =============================================================================
// Numbers
// =============================================================================

macro_rules! impl_orderable_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Orderable for $integer {
                #[inline]
                fn compare(&self, other: &Self) -> Comparison {
                    self.cmp(other).into()
                }
            }
        )*
    };
}

impl_orderable_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_orderable_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Orderable for $float {
                #[inline]
                fn compare(&self, other: &Self) -> Comparison {
                    self.partial_cmp(other).into()
                }

                // NaN sorts after every number and ties with other NaNs.
                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other)
                        .unwrap_or_else(|| self.is_nan().cmp(&other.is_nan()))
                }
            }
        )*
    };
}

impl_orderable_for_float!(f32, f64);

// =============================================================================
// Dates
// =============================================================================

impl<Tz: chrono::TimeZone> Orderable for chrono::DateTime<Tz> {
    fn compare(&self, other: &Self) -> Comparison {
        self.cmp(other).into()
    }
}

impl Orderable for chrono::NaiveDateTime {
    fn compare(&self, other: &Self) -> Comparison {
        self.cmp(other).into()
    }
}

impl Orderable for chrono::NaiveDate {
    fn compare(&self, other: &Self) -> Comparison {
        self.cmp(other).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    #[rstest]
    #[case("a", "b", Comparison::Less)]
    #[case("a", "B", Comparison::Less)]
    #[case("B", "a", Comparison::Greater)]
    #[case("a", "A", Comparison::Less)]
    #[case("A", "a", Comparison::Greater)]
    #[case("same", "same", Comparison::Equal)]
    #[case("", "a", Comparison::Less)]
    #[case("apple", "apples", Comparison::Less)]
    fn test_text_order(#[case] left: &str, #[case] right: &str, #[case] expected: Comparison) {
        assert_eq!(left.compare(right), expected);
    }

    #[rstest]
    fn test_number_order() {
        assert_eq!(1_i32.compare(&2), Comparison::Less);
        assert_eq!(2_u64.compare(&1), Comparison::Greater);
        assert_eq!(2.5_f64.compare(&2.5), Comparison::Equal);
        assert_eq!(f64::NAN.compare(&1.0), Comparison::Incomparable);
    }

    #[rstest]
    fn test_nan_total_order_sorts_last() {
        assert_eq!(f64::NAN.total_order(&f64::INFINITY), Ordering::Greater);
        assert_eq!(1.0_f64.total_order(&f64::NAN), Ordering::Less);
        assert_eq!(f64::NAN.total_order(&f64::NAN), Ordering::Equal);
    }

    #[rstest]
    fn test_date_order_by_instant() {
        let earlier = Utc.with_ymd_and_hms(2021, 12, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2021, 12, 5, 0, 0, 0).unwrap();
        assert_eq!(earlier.compare(&later), Comparison::Less);
        assert_eq!(later.compare(&later), Comparison::Equal);
    }

    #[rstest]
    #[case(vec![], vec![], Comparison::Equal)]
    #[case(vec![], vec![1], Comparison::Less)]
    #[case(vec![1], vec![], Comparison::Greater)]
    #[case(vec![1], vec![2], Comparison::Less)]
    #[case(vec![2, 1], vec![3], Comparison::Less)]
    #[case(vec![1], vec![1, 5], Comparison::Less)]
    #[case(vec![1, 2], vec![1, 3], Comparison::Equal)]
    fn test_sequence_order(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Comparison,
    ) {
        assert_eq!(left.compare(&right), expected);
    }

    #[rstest]
    fn test_sequence_equivalence_checks_every_element() {
        assert!(!vec![1, 2].equivalent(&vec![1, 3]));
        assert!(vec![vec![1, 3]].equivalent(&vec![vec![1, 3]]));
        assert!(!vec![vec![1, 3]].equivalent(&vec![vec![1, 4]]));
    }

    #[rstest]
    fn test_tuple_ordered_by_first_component() {
        assert_eq!((1, "b").compare(&(2, "a")), Comparison::Less);
        assert_eq!((1, "b").compare(&(1, "a")), Comparison::Equal);
        assert!(!(1, "b").equivalent(&(1, "a")));
    }
}
