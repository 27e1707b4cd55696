//! Structural comparison and equality.
//!
//! This module is the Ord/Eq engine of the crate. It provides:
//!
//! - [`Comparison`]: a three-way result with an explicit
//!   [`Incomparable`](Comparison::Incomparable) case
//! - [`Orderable`]: the trait implemented by every type the engine can
//!   order (strings, numbers, dates, pairs and sequences, recursively)
//! - [`Value`]: a closed enum of dynamically shaped values for comparing
//!   heterogeneous nested containers
//! - [`compare`], [`try_compare`] and [`equals`]: free-function entry points
//!
//! # Ordering
//!
//! Scalars of the same kind order naturally: text by locale-style
//! collation, numbers numerically, dates chronologically. Arrays order by
//! their first element, and the shorter array wins a tie; an empty array
//! sorts before every other array. Pairs order as 2-element arrays.
//!
//! Any other pairing has no order and yields `Incomparable`. For sorting,
//! [`Orderable::total_order`] extends the engine into a total order by
//! ranking kinds (numbers, text, dates, booleans, sequences, optional
//! values, dictionaries) and placing `NaN` after every other number.
//!
//! # Examples
//!
//! ```rust
//! use fp_prelude::ord::{self, Comparison, Value};
//!
//! assert_eq!(ord::compare("apple", "Banana"), Comparison::Less);
//! assert_eq!(ord::compare(&[2, 1][..], &[3][..]), Comparison::Less);
//!
//! let error = ord::try_compare(&Value::from("a"), &Value::from(true)).unwrap_err();
//! assert_eq!(error.to_string(), "cannot order text against bool");
//!
//! assert!(ord::equals(&Value::from(vec![1, 2]), &Value::from(vec![1, 2])));
//! ```

mod comparison;
mod error;
mod orderable;
mod value;

use std::cmp::Ordering;

pub use comparison::Comparison;
pub use error::IncomparableError;
pub use orderable::Orderable;
pub use value::{Scalar, ScalarKind, Value, ValueKind};

/// Compares two values of the same orderable type.
///
/// # Examples
///
/// ```rust
/// use fp_prelude::ord::{self, Comparison};
///
/// assert_eq!(ord::compare(&1, &2), Comparison::Less);
/// assert_eq!(ord::compare(&vec![1], &vec![1, 0]), Comparison::Less);
/// assert_eq!(ord::compare(&f64::NAN, &1.0), Comparison::Incomparable);
/// ```
#[inline]
#[must_use]
pub fn compare<T: Orderable + ?Sized>(left: &T, right: &T) -> Comparison {
    left.compare(right)
}

/// Compares two values, failing when they have no order between them.
///
/// # Errors
///
/// Returns an [`IncomparableError`] naming the kinds of the innermost pair
/// that could not be ordered.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fp_prelude::ord::{self, Value};
///
/// assert_eq!(ord::try_compare(&Value::from(1), &Value::from(2)), Ok(Ordering::Less));
/// assert!(ord::try_compare(&Value::from(vec![1]), &Value::from(vec!["a"])).is_err());
/// ```
#[must_use]
pub fn try_compare(left: &Value, right: &Value) -> Result<Ordering, IncomparableError> {
    match left.compare(right).to_maybe() {
        crate::maybe::Maybe::Just(ordering) => Ok(ordering),
        crate::maybe::Maybe::Nothing => {
            let (left_kind, right_kind) = left.innermost_incomparable(right);
            tracing::debug!(left = %left_kind, right = %right_kind, "rejected incomparable pair");
            Err(IncomparableError {
                left: left_kind,
                right: right_kind,
            })
        }
    }
}

/// Deep structural equality between two values.
///
/// Equivalent to `left == right`.
#[inline]
#[must_use]
pub fn equals(left: &Value, right: &Value) -> bool {
    left.equals(right)
}

/// Returns the smaller of two values under the total order.
///
/// The first argument wins ties.
#[must_use]
pub fn min<T: Orderable>(left: T, right: T) -> T {
    if right.total_order(&left).is_lt() {
        right
    } else {
        left
    }
}

/// Returns the larger of two values under the total order.
///
/// The second argument wins ties.
#[must_use]
pub fn max<T: Orderable>(left: T, right: T) -> T {
    if right.total_order(&left).is_lt() {
        left
    } else {
        right
    }
}
