//! Element filtering for [`crate::types::Sequence`].

use crate::error::{SequenceError, SequenceResult};
use crate::types::Sequence;

/// Returns a new [`Sequence`] containing only elements for which `predicate`
/// returns `true`, preserving relative order.
///
/// This is a convenience wrapper around [`Sequence::filter_items`].
pub fn filter<T, F>(seq: &Sequence<T>, predicate: F) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq.filter_items(predicate)
}

/// Returns a new [`Sequence`] with duplicate elements removed, keeping the
/// first occurrence of each value.
///
/// Uses value equality, so elements only need `PartialEq` (not `Hash` or
/// `Ord`). Quadratic in the number of distinct values.
pub fn distinct<T>(seq: &Sequence<T>) -> Sequence<T>
where
    T: Clone + PartialEq,
{
    let mut items: Vec<T> = Vec::new();
    for element in seq.iter() {
        if !items.contains(element) {
            items.push(element.clone());
        }
    }
    Sequence::new(items)
}

/// Returns a new [`Sequence`] containing at most the first `n` elements.
///
/// `n` is accepted as a signed integer so that a computed negative count is
/// rejected rather than silently wrapped; a count larger than the sequence
/// returns the whole sequence.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `n < 0`.
pub fn limit<T>(seq: &Sequence<T>, n: i64) -> SequenceResult<Sequence<T>>
where
    T: Clone,
{
    if n < 0 {
        return Err(SequenceError::InvalidArgument {
            message: format!("limit count must be non-negative, got {n}"),
        });
    }
    let n = usize::try_from(n).unwrap_or(usize::MAX);
    Ok(Sequence::new(seq.iter().take(n).cloned().collect()))
}
