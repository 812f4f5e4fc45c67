//! Scalar aggregates for [`crate::types::Sequence`].

use std::cmp::Ordering;
use std::fmt::Display;

use crate::optional::OptionalValue;
use crate::types::Sequence;

/// Number of elements in the sequence.
pub fn count<T>(seq: &Sequence<T>) -> usize {
    seq.len()
}

/// Minimum element according to `comparator`.
///
/// Returns [`OptionalValue::Absent`] on an empty sequence. On ties the
/// earliest minimum wins.
pub fn min<T, F>(seq: &Sequence<T>, mut comparator: F) -> OptionalValue<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    extremum(seq, |a, b| comparator(a, b) == Ordering::Less)
}

/// Maximum element according to `comparator`.
///
/// Returns [`OptionalValue::Absent`] on an empty sequence. On ties the
/// earliest maximum wins.
pub fn max<T, F>(seq: &Sequence<T>, mut comparator: F) -> OptionalValue<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    extremum(seq, |a, b| comparator(a, b) == Ordering::Greater)
}

fn extremum<T, F>(seq: &Sequence<T>, mut beats: F) -> OptionalValue<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut best: Option<&T> = None;
    for element in seq.iter() {
        match best {
            // Strict comparison keeps the earliest winner on ties.
            Some(current) if !beats(element, current) => {}
            _ => best = Some(element),
        }
    }
    OptionalValue::of_nullable(best.cloned())
}

/// Sum of all elements; the additive zero on an empty sequence.
pub fn sum<T>(seq: &Sequence<T>) -> T
where
    T: for<'a> std::iter::Sum<&'a T>,
{
    seq.iter().sum()
}

/// Join the display forms of all elements with `separator`.
///
/// No leading or trailing separator, no line terminator: the result is a
/// plain in-memory string suitable for direct assertions.
pub fn join<T>(seq: &Sequence<T>, separator: &str) -> String
where
    T: Display,
{
    let mut out = String::new();
    for (i, element) in seq.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&element.to_string());
    }
    out
}
