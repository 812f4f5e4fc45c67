//! Ordering operations for [`crate::types::Sequence`].

use std::cmp::Ordering;

use crate::types::Sequence;

/// Returns a new [`Sequence`] with the elements sorted by `comparator`.
///
/// The sort is stable: elements that compare equal keep their input order.
/// The input sequence is not modified.
pub fn sorted<T, F>(seq: &Sequence<T>, comparator: F) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut items = seq.items.clone();
    items.sort_by(comparator);
    Sequence::new(items)
}
