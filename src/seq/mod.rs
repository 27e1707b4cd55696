//! Sorted, duplicate-free sequences.
//!
//! This module provides [`Seq`], an array-backed collection kept sorted by
//! the Ord engine and free of structural duplicates.
//!
//! # Overview
//!
//! Every way of building a `Seq` goes through [`Seq::from_list`]:
//!
//! 1. the elements are sorted (stably) by [`Orderable::total_order`];
//! 2. within each run of order-equal elements, any element structurally
//!    equal (`==`) to one already kept is dropped.
//!
//! Order-equal is weaker than structurally equal: `[1, 2]` and `[1, 3]`
//! tie because arrays order by their first element, yet both are kept.
//!
//! # Functional Programming Principles
//!
//! - **Immutability**: [`insert`](Seq::insert) returns a new sequence
//! - **Structural sharing**: clones share storage through `Arc`
//!
//! # Time Complexity
//!
//! | Operation   | Complexity       |
//! |-------------|------------------|
//! | `from_list` | O(n log n)       |
//! | `insert`    | O(n log n)       |
//! | `contains`  | O(log n + k)     |
//! | `equals`    | O(n)             |
//! | `len`       | O(1)             |
//!
//! `k` is the length of the run of elements order-equal to the element looked up.
//!
//! # Examples
//!
//! ```rust
//! use fp_prelude::seq::Seq;
//!
//! let sequence = Seq::from_list(vec![vec![1], vec![1], vec![2, 1], vec![], vec![3], vec![]]);
//! assert_eq!(sequence.as_slice(), &[vec![], vec![1], vec![2, 1], vec![3]]);
//!
//! let extended = sequence.insert(vec![0]);
//! assert_eq!(extended.len(), 5);
//! assert_eq!(sequence.len(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::maybe::Maybe;
use crate::ord::{Comparison, Orderable};

/// A sorted, duplicate-free sequence.
///
/// See the [module documentation](self) for the ordering and deduplication
/// rules.
///
/// # Examples
///
/// ```rust
/// use fp_prelude::seq::Seq;
///
/// let words = Seq::from_list(vec!["pear", "Apple", "apple", "pear"]);
/// assert_eq!(words.as_slice(), &["apple", "Apple", "pear"]);
/// ```
#[derive(Clone)]
pub struct Seq<T> {
    elements: Arc<Vec<T>>,
}

impl<T> Seq<T> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            elements: Arc::new(Vec::new()),
        }
    }

    /// Creates a sequence holding exactly `value`.
    #[inline]
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self {
            elements: Arc::new(vec![value]),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements in ascending order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the smallest element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Maybe<&T> {
        self.elements.first().into()
    }

    /// Returns the largest element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Maybe<&T> {
        self.elements.last().into()
    }
}

impl<T: Clone> Seq<T> {
    /// Copies the elements into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        Vec::clone(&self.elements)
    }
}

impl<T: Orderable + PartialEq> Seq<T> {
    /// Builds a sequence from any list of elements.
    ///
    /// Sorts the elements by [`Orderable::total_order`] and drops structural
    /// duplicates. The input order of order-equal elements is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::seq::Seq;
    ///
    /// let sequence = Seq::from_list(vec![3, 1, 2, 3, 1]);
    /// assert_eq!(sequence.as_slice(), &[1, 2, 3]);
    ///
    /// // Equal heads tie, so both arrays survive in input order.
    /// let sequence = Seq::from_list(vec![vec![1, 3], vec![1, 2], vec![1, 3]]);
    /// assert_eq!(sequence.as_slice(), &[vec![1, 3], vec![1, 2]]);
    /// ```
    #[must_use]
    pub fn from_list<I>(list: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: Vec<T> = list.into_iter().collect();
        let mut incomparable_pairs = 0_usize;
        elements.sort_by(|left, right| {
            if left.compare(right).is_incomparable() {
                incomparable_pairs += 1;
            }
            left.total_order(right)
        });
        if incomparable_pairs > 0 {
            tracing::debug!(
                incomparable_pairs,
                length = elements.len(),
                "sorted incomparable elements by kind rank"
            );
        }
        Self {
            elements: Arc::new(dedupe_runs(elements)),
        }
    }

    /// Returns `true` if an element structurally equal to `element` is
    /// present.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        let start = self
            .elements
            .partition_point(|candidate| candidate.total_order(element).is_lt());
        self.elements[start..]
            .iter()
            .take_while(|&candidate| candidate.total_order(element).is_eq())
            .any(|candidate| candidate == element)
    }

    /// Order-equivalence of two sequences.
    ///
    /// Sequences are equivalent when they have the same length and their
    /// elements are pairwise [`equivalent`](Orderable::equivalent): nested
    /// arrays are checked element by element, other elements by their
    /// comparison being `Equal`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::seq::Seq;
    ///
    /// let left = Seq::from_list(vec![vec![1, 2], vec![3]]);
    /// let right = Seq::from_list(vec![vec![3], vec![1, 2]]);
    /// assert!(left.equals(&right));
    /// assert!(!left.equals(&Seq::from_list(vec![vec![1, 9], vec![3]])));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left.equivalent(right))
    }
}

impl<T: Orderable + PartialEq + Clone> Seq<T> {
    /// Returns a sequence that also holds `element`.
    ///
    /// Equivalent to rebuilding the sequence from its elements followed by
    /// `element`, so an element already present is not added twice.
    ///
    /// Presence is decided by `==`. A value that is not equal to itself,
    /// such as `f64::NAN`, is therefore never found, and every insert of it
    /// adds another copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::seq::Seq;
    ///
    /// let sequence = Seq::from_list(vec![1, 3]);
    /// assert_eq!(sequence.insert(2).as_slice(), &[1, 2, 3]);
    /// assert_eq!(sequence.insert(3).as_slice(), &[1, 3]);
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        Self::from_list(self.iter().cloned().chain(std::iter::once(element)))
    }
}

/// Keeps the first of every group of structurally equal elements inside
/// each run of order-equal elements.
fn dedupe_runs<T: Orderable + PartialEq>(sorted: Vec<T>) -> Vec<T> {
    let mut kept: Vec<T> = Vec::with_capacity(sorted.len());
    let mut run_start = 0;
    for element in sorted {
        let continues_run = kept
            .last()
            .is_some_and(|previous| previous.total_order(&element) == Ordering::Equal);
        if !continues_run {
            run_start = kept.len();
        }
        if !kept[run_start..].contains(&element) {
            kept.push(element);
        }
    }
    kept
}

// =============================================================================
// Free Functions
// =============================================================================

/// Returns `sequence` with `element` added.
///
/// Function-first form of [`Seq::insert`].
#[must_use]
pub fn insert<T: Orderable + PartialEq + Clone>(element: T, sequence: &Seq<T>) -> Seq<T> {
    sequence.insert(element)
}

/// Function-first form of [`Seq::equals`].
#[must_use]
pub fn equals<T: Orderable + PartialEq>(left: &Seq<T>, right: &Seq<T>) -> bool {
    left.equals(right)
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Orderable> Orderable for Seq<T> {
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

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.elements, &other.elements) || self.elements == other.elements
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T: Orderable + PartialEq> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_list(iter)
    }
}

impl<T: Clone> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Arc::unwrap_or_clone(self.elements).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Seq<i32>: Send, Sync, Clone);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Seq<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct SeqVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SeqVisitor<T>
where
    T: serde::Deserialize<'de> + Orderable + PartialEq,
{
    type Value = Seq<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(Seq::from_list(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Seq<T>
where
    T: serde::Deserialize<'de> + Orderable + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ord::Value;
    use rstest::rstest;

    #[rstest]
    fn test_empty_and_singleton() {
        assert!(Seq::<i32>::empty().is_empty());
        assert_eq!(Seq::singleton(5).as_slice(), &[5]);
        assert_eq!(Seq::<i32>::default(), Seq::empty());
    }

    #[rstest]
    fn test_from_list_nested_arrays() {
        let sequence = Seq::from_list(vec![vec![1], vec![1], vec![2, 1], vec![], vec![3], vec![]]);
        assert_eq!(
            sequence.to_vec(),
            vec![vec![], vec![1], vec![2, 1], vec![3]]
        );
    }

    #[rstest]
    fn test_from_list_keeps_order_equal_but_distinct_elements() {
        let sequence = Seq::from_list(vec![vec![1, 2], vec![1, 3], vec![1, 2]]);
        assert_eq!(sequence.to_vec(), vec![vec![1, 2], vec![1, 3]]);
    }

    #[rstest]
    fn test_insert_leaves_input_untouched() {
        let original = Seq::from_list(vec![2, 4]);
        let inserted = original.insert(3);
        assert_eq!(original.as_slice(), &[2, 4]);
        assert_eq!(inserted.as_slice(), &[2, 3, 4]);
    }

    #[rstest]
    fn test_nan_is_never_deduplicated() {
        let sequence = Seq::from_list(vec![1.0, f64::NAN]).insert(f64::NAN);
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.as_slice()[0], 1.0);
        assert!(sequence.iter().skip(1).all(|number| number.is_nan()));
        assert!(!sequence.contains(&f64::NAN));
    }

    #[rstest]
    fn test_contains_searches_whole_order_equal_run() {
        let sequence = Seq::from_list(vec![vec![1, 4], vec![1, 2], vec![1, 3], vec![0]]);
        assert!(sequence.contains(&vec![1, 4]));
        assert!(sequence.contains(&vec![1, 3]));
        assert!(!sequence.contains(&vec![1, 5]));
    }

    #[rstest]
    fn test_contains() {
        let sequence = Seq::from_list(vec![vec![1, 2], vec![1, 3], vec![4]]);
        assert!(sequence.contains(&vec![1, 3]));
        assert!(!sequence.contains(&vec![1, 4]));
        assert!(!sequence.contains(&vec![]));
    }

    #[rstest]
    fn test_first_and_last() {
        let sequence = Seq::from_list(vec![5, 1, 3]);
        assert_eq!(sequence.first(), Maybe::Just(&1));
        assert_eq!(sequence.last(), Maybe::Just(&5));
        assert_eq!(Seq::<i32>::empty().first(), Maybe::Nothing);
    }

    #[rstest]
    fn test_equals_is_length_sensitive() {
        assert!(!Seq::from_list(vec![1, 2]).equals(&Seq::from_list(vec![1])));
        assert!(Seq::<i32>::empty().equals(&Seq::empty()));
    }

    #[rstest]
    fn test_mixed_values_sort_by_kind() {
        let sequence = Seq::from_list(vec![
            Value::from("b"),
            Value::from(true),
            Value::from(2),
            Value::from("a"),
            Value::from(2),
        ]);
        assert_eq!(
            sequence.to_vec(),
            vec![
                Value::from(2),
                Value::from("a"),
                Value::from("b"),
                Value::from(true)
            ]
        );
    }

    #[rstest]
    fn test_nested_sequences_are_orderable() {
        let inner_small = Seq::from_list(vec![1, 2]);
        let inner_large = Seq::from_list(vec![5]);
        let outer = Seq::from_list(vec![inner_large.clone(), inner_small.clone(), inner_large]);
        assert_eq!(outer.len(), 2);
        assert_eq!(outer.first(), Maybe::Just(&inner_small));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Seq::from_list(vec![3, 1, 2]).to_string(), "[1, 2, 3]");
        assert_eq!(format!("{:?}", Seq::from_list(vec![2, 1])), "[1, 2]");
    }

    #[rstest]
    fn test_collect_and_into_iter() {
        let sequence: Seq<i32> = vec![4, 4, 1].into_iter().collect();
        let elements: Vec<i32> = sequence.into_iter().collect();
        assert_eq!(elements, vec![1, 4]);
    }
}
