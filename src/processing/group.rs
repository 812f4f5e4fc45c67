//! Classification operations for [`crate::types::Sequence`].

use crate::types::{GroupingResult, PartitionResult, Sequence};

/// Classify each element by `key_fn` into a [`GroupingResult`].
///
/// All elements with equal keys land in the same bucket, in input order.
/// Keys appear in first-occurrence order of their first member.
pub fn group_by<T, K, F>(seq: &Sequence<T>, mut key_fn: F) -> GroupingResult<K, T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut groups = GroupingResult::new();
    for element in seq.iter() {
        groups.insert(key_fn(element), element.clone());
    }
    groups
}

/// Split a sequence into true/false buckets in a single pass over the input.
///
/// Input order is preserved within each bucket.
pub fn partition_by<T, F>(seq: &Sequence<T>, mut predicate: F) -> PartitionResult<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    for element in seq.iter() {
        if predicate(element) {
            matched.push(element.clone());
        } else {
            unmatched.push(element.clone());
        }
    }
    PartitionResult { matched, unmatched }
}
