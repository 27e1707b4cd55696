//! Text-keyed dictionaries.
//!
//! This module provides [`Dict<T>`], an immutable mapping from `String` keys
//! to values of a single type. Keys are unique, and `keys`, `values`,
//! `to_list` and iteration all follow sorted key order rather than insertion
//! order.
//!
//! Every operation that changes the dictionary returns a new one; the
//! receiver is left as it was. Entries live behind an `Arc`, so clones are
//! cheap and operations that change nothing share the receiver's storage.
//!
//! # Examples
//!
//! ```rust
//! use fp_prelude::dict::Dict;
//! use fp_prelude::maybe::Maybe;
//!
//! let animals = Dict::from_list([("Tom", "Cat"), ("Jerry", "Mouse")]);
//!
//! assert_eq!(animals.get("Tom"), Maybe::Just(&"Cat"));
//! assert_eq!(animals.get("Spike"), Maybe::Nothing);
//! assert_eq!(animals.keys(), vec!["Jerry", "Tom"]);
//!
//! let with_dog = animals.insert("Spike", "Dog");
//! assert_eq!(with_dog.size(), 3);
//! assert_eq!(animals.size(), 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::maybe::Maybe;

/// An immutable dictionary from text keys to values of type `T`.
///
/// # Examples
///
/// ```rust
/// use fp_prelude::dict::Dict;
///
/// let scores = Dict::empty().insert("b", 2).insert("a", 1);
/// assert_eq!(scores.values(), vec![&1, &2]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Dict<T> {
    entries: Arc<BTreeMap<String, T>>,
}

impl<T> Dict<T> {
    /// Creates an empty dictionary.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Arc::new(BTreeMap::new()),
        }
    }

    /// Creates a dictionary with a single entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::dict::Dict;
    ///
    /// let dict = Dict::singleton("one", 1);
    /// assert_eq!(dict.size(), 1);
    /// assert!(dict.member("one"));
    /// ```
    #[must_use]
    pub fn singleton(key: impl Into<String>, value: T) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.into(), value);
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Builds a dictionary from key-value pairs.
    ///
    /// When a key appears more than once, the last pair wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::dict::Dict;
    ///
    /// let dict = Dict::from_list([("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(dict.to_list(), vec![("a".to_string(), 3), ("b".to_string(), 2)]);
    /// ```
    #[must_use]
    pub fn from_list<K, I>(list: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut entries = BTreeMap::new();
        for (key, value) in list {
            let key = key.into();
            if entries.contains_key(&key) {
                tracing::trace!(key = %key, "duplicate dictionary key, keeping the later value");
            }
            entries.insert(key, value);
        }
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Returns `true` if the dictionary has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if `key` is present.
    ///
    /// Membership depends only on the key; a stored `0`, `""` or `false`
    /// is still a member.
    #[inline]
    #[must_use]
    pub fn member(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Looks up the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::dict::Dict;
    /// use fp_prelude::maybe::Maybe;
    ///
    /// let dict = Dict::singleton("zero", 0);
    /// assert_eq!(dict.get("zero"), Maybe::Just(&0));
    /// assert_eq!(dict.get("one"), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Maybe<&T> {
        self.entries.get(key).into()
    }

    /// Returns the keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Returns the values in the sorted order of their keys.
    #[must_use]
    pub fn values(&self) -> Vec<&T> {
        self.entries.values().collect()
    }

    /// Returns an iterator over the entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Folds over the entries in sorted key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::dict::Dict;
    ///
    /// let dict = Dict::from_list([("a", 1), ("b", 2)]);
    /// assert_eq!(dict.foldl(0, |_, value, total| total + value), 3);
    /// ```
    #[must_use]
    pub fn foldl<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(&str, &T, B) -> B,
    {
        self.entries
            .iter()
            .fold(initial, |accumulator, (key, value)| function(key, value, accumulator))
    }

    /// Applies `function` to every value, keeping the keys.
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> Dict<U>
    where
        F: FnMut(&str, &T) -> U,
    {
        Dict {
            entries: Arc::new(
                self.entries
                    .iter()
                    .map(|(key, value)| (key.clone(), function(key, value)))
                    .collect(),
            ),
        }
    }
}

impl<T: Clone> Dict<T> {
    /// Returns a dictionary with `key` bound to `value`.
    ///
    /// An existing binding for `key` is replaced.
    #[must_use]
    pub fn insert(&self, key: impl Into<String>, value: T) -> Self {
        let mut entries = Arc::clone(&self.entries);
        Arc::make_mut(&mut entries).insert(key.into(), value);
        Self { entries }
    }

    /// Returns a dictionary without `key`.
    ///
    /// Removing a missing key returns a dictionary sharing the receiver's
    /// storage.
    #[must_use]
    pub fn remove(&self, key: &str) -> Self {
        if !self.member(key) {
            return self.clone();
        }
        let mut entries = Arc::clone(&self.entries);
        Arc::make_mut(&mut entries).remove(key);
        Self { entries }
    }

    /// Attempts to update the value stored under `key` with `alter`.
    ///
    /// `alter` receives the current value. If it returns `Just(new)`, the
    /// entry is replaced; if it returns `Nothing`, or if `key` is absent,
    /// the dictionary is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::dict::Dict;
    /// use fp_prelude::maybe::Maybe;
    ///
    /// let dict = Dict::from_list([("a", 1), ("b", 2), ("c", 3)]);
    ///
    /// let updated = dict.update("a", |value| value.map(|x| x + 2));
    /// assert_eq!(updated.get("a"), Maybe::Just(&3));
    ///
    /// let untouched = dict.update("a", |_| Maybe::Nothing);
    /// assert_eq!(untouched, dict);
    /// ```
    #[must_use]
    pub fn update<F>(&self, key: &str, alter: F) -> Self
    where
        F: FnOnce(Maybe<&T>) -> Maybe<T>,
    {
        let Some(current) = self.entries.get(key) else {
            return self.clone();
        };
        match alter(Maybe::Just(current)) {
            Maybe::Just(value) => self.insert(key, value),
            Maybe::Nothing => self.clone(),
        }
    }

    /// Returns the entries as key-value pairs in sorted key order.
    #[must_use]
    pub fn to_list(&self) -> Vec<(String, T)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Keeps only the entries satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&str, &T) -> bool,
    {
        Self {
            entries: Arc::new(
                self.entries
                    .iter()
                    .filter(|(key, value)| predicate(key.as_str(), value))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            ),
        }
    }
}

impl<T> Default for Dict<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Dict<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self::from_list(iter)
    }
}

impl<T: Clone> IntoIterator for Dict<T> {
    type Item = (String, T);
    type IntoIter = std::collections::btree_map::IntoIter<String, T>;

    fn into_iter(self) -> Self::IntoIter {
        Arc::unwrap_or_clone(self.entries).into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Dict<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Dict<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self.entries.iter() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Dict<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.size()))?;
        for (key, value) in self.entries.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct DictVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for DictVisitor<T> {
    type Value = Dict<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            entries.insert(key, value);
        }
        Ok(Dict {
            entries: Arc::new(entries),
        })
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Dict<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(DictVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_empty_dict() {
        let dict: Dict<i32> = Dict::empty();
        assert_eq!(format!("{dict}"), "{}");
    }

    #[rstest]
    fn test_display_sorted_entries() {
        let dict = Dict::from_list([("b", 2), ("a", 1)]);
        assert_eq!(format!("{dict}"), "{a: 1, b: 2}");
    }

    #[rstest]
    fn test_member_with_falsy_values() {
        let dict = Dict::from_list([("zero", 0), ("one", 1)]);
        assert!(dict.member("zero"));
        assert_eq!(dict.get("zero"), Maybe::Just(&0));
    }

    #[rstest]
    fn test_update_missing_key_is_unchanged() {
        let dict = Dict::singleton("a", 1);
        let updated = dict.update("b", |_| Maybe::Just(5));
        assert_eq!(updated, dict);
    }

    #[rstest]
    fn test_unchanged_results_share_storage() {
        let dict = Dict::from_list([("a", 1), ("b", 2)]);
        assert!(Arc::ptr_eq(&dict.remove("missing").entries, &dict.entries));
        assert!(Arc::ptr_eq(&dict.update("missing", |_| Maybe::Just(0)).entries, &dict.entries));
        assert!(!Arc::ptr_eq(&dict.insert("c", 3).entries, &dict.entries));
    }

    #[rstest]
    fn test_insert_leaves_original_intact() {
        let dict = Dict::singleton("a", 1);
        let inserted = dict.insert("a", 10).insert("b", 2);
        assert_eq!(dict.to_list(), vec![("a".to_owned(), 1)]);
        assert_eq!(inserted.to_list(), vec![("a".to_owned(), 10), ("b".to_owned(), 2)]);
    }

    #[rstest]
    fn test_remove_leaves_original_intact() {
        let dict = Dict::from_list([("a", 1), ("b", 2)]);
        let removed = dict.remove("a");
        assert_eq!(removed.keys(), vec!["b"]);
        assert_eq!(dict.keys(), vec!["a", "b"]);
    }
}
