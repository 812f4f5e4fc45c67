//! Core data model types.
//!
//! The crate operates on an in-memory [`Sequence`]; classification operations
//! produce a [`GroupingResult`] or [`PartitionResult`].

use serde::{Deserialize, Serialize};

/// An ordered, finite, in-memory collection of elements.
///
/// All operations in [`crate::processing`] take a `&Sequence<T>` and produce
/// fresh sequences or scalars; the input is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence<T> {
    /// Elements in order.
    pub items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Create a sequence from a vector of elements.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Create an empty sequence.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Create a new sequence by applying `transform` to every element.
    ///
    /// Element count and order are preserved.
    pub fn map_items<U, F>(&self, transform: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence::new(self.items.iter().map(transform).collect())
    }

    /// Create a new sequence containing only elements that match `predicate`.
    ///
    /// Relative order is preserved.
    pub fn filter_items<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        Self::new(
            self.items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        )
    }

    /// Fold all elements left-to-right into an accumulator value.
    ///
    /// This is similar to `Iterator::fold`, but keeps the sequence borrowed.
    pub fn fold_items<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.items.iter().fold(initial, |acc, item| combine(acc, item))
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A key → bucket-of-values mapping built by classification.
///
/// Built by [`crate::processing::group_by`]. Keys appear in first-occurrence
/// order of their first member; values within a bucket keep input order.
///
/// Storage is a plain ordered list of `(key, bucket)` pairs so that key
/// order survives and keys only need `PartialEq`, not `Hash` or `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingResult<K, V> {
    /// `(key, bucket)` pairs in first-occurrence key order.
    pub groups: Vec<(K, Vec<V>)>,
}

impl<K, V> GroupingResult<K, V> {
    /// Create an empty grouping.
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if the grouping has no keys.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(key, _)| key)
    }

    /// Returns the bucket for `key`, if present.
    pub fn get(&self, key: &K) -> Option<&[V]>
    where
        K: PartialEq,
    {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, bucket)| bucket.as_slice())
    }

    /// Push `value` into the bucket for `key`, creating the bucket on first
    /// occurrence of the key.
    pub fn insert(&mut self, key: K, value: V)
    where
        K: PartialEq,
    {
        match self.groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(value),
            None => self.groups.push((key, vec![value])),
        }
    }

    /// Occurrence count per key, in key order.
    pub fn counts(&self) -> Vec<(K, usize)>
    where
        K: Clone,
    {
        self.groups
            .iter()
            .map(|(key, bucket)| (key.clone(), bucket.len()))
            .collect()
    }
}

impl<K, V> Default for GroupingResult<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A two-bucket split produced by a boolean predicate.
///
/// Built by [`crate::processing::partition_by`]. `matched` is the
/// true-bucket, `unmatched` the false-bucket; input order is preserved
/// within each bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionResult<V> {
    /// Elements for which the predicate returned `true`, in input order.
    pub matched: Vec<V>,
    /// Elements for which the predicate returned `false`, in input order.
    pub unmatched: Vec<V>,
}
