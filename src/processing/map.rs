//! Element mapping for [`crate::types::Sequence`].

use crate::types::Sequence;

/// Returns a new [`Sequence`] by applying `transform` to every element.
///
/// Element count and order are preserved. `transform` must be total over the
/// element type; there is no skip-on-failure path here (map a fallible
/// transform to a sequence of `Result`s and [`filter()`](crate::processing::filter)
/// afterwards if partiality is needed).
///
/// This is a convenience wrapper around [`Sequence::map_items`].
pub fn map<T, U, F>(seq: &Sequence<T>, transform: F) -> Sequence<U>
where
    F: FnMut(&T) -> U,
{
    seq.map_items(transform)
}

/// Returns a new [`Sequence`] by expanding every element into a sub-sequence
/// and concatenating the sub-sequences in order.
pub fn flat_map<T, U, F>(seq: &Sequence<T>, mut expand: F) -> Sequence<U>
where
    F: FnMut(&T) -> Sequence<U>,
{
    let mut items = Vec::new();
    for element in seq.iter() {
        items.extend(expand(element));
    }
    Sequence::new(items)
}
