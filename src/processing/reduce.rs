//! Reduction (fold) operations for [`crate::types::Sequence`].

use crate::optional::OptionalValue;
use crate::types::Sequence;

/// Fold a sequence left-to-right using `combine`, seeding the accumulator
/// with the first element.
///
/// Returns [`OptionalValue::Absent`] on an empty sequence, otherwise
/// `Present` with the final accumulated value. A single-element sequence
/// reduces to that element without invoking `combine`.
pub fn reduce<T, F>(seq: &Sequence<T>, mut combine: F) -> OptionalValue<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let mut iter = seq.iter();
    let Some(first) = iter.next() else {
        return OptionalValue::Absent;
    };
    let acc = iter.fold(first.clone(), |acc, item| combine(acc, item));
    OptionalValue::Present(acc)
}

/// Fold a sequence left-to-right using `combine`, seeded with `initial`.
///
/// Always returns a plain value: on an empty sequence this is `initial`
/// itself. The accumulator type may differ from the element type.
///
/// This is a convenience wrapper around [`Sequence::fold_items`].
pub fn reduce_with_initial<T, A, F>(seq: &Sequence<T>, initial: A, combine: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    seq.fold_items(initial, combine)
}

#[cfg(test)]
mod tests {
    use super::{reduce, reduce_with_initial};
    use crate::optional::OptionalValue;
    use crate::types::Sequence;

    #[test]
    fn reduce_folds_left_to_right() {
        let integers = Sequence::new(vec![3, 2, 2, 3, 7, 3, 5]);
        let minimum = reduce(&integers, |x, y| if x <= *y { x } else { *y });
        assert_eq!(minimum, OptionalValue::Present(2));

        let total = reduce(&integers, |x, y| x + y);
        assert_eq!(total, OptionalValue::Present(25));
    }

    #[test]
    fn reduce_on_empty_is_absent() {
        let seq: Sequence<i64> = Sequence::empty();
        assert_eq!(reduce(&seq, |x, y| x + y), OptionalValue::Absent);
    }

    #[test]
    fn reduce_on_singleton_is_the_element_without_combining() {
        let seq = Sequence::new(vec![42]);
        let out = reduce(&seq, |_, _| panic!("combine must not run"));
        assert_eq!(out, OptionalValue::Present(42));
    }

    #[test]
    fn reduce_with_initial_always_returns_a_value() {
        let seq: Sequence<i64> = Sequence::empty();
        assert_eq!(reduce_with_initial(&seq, 10, |acc, v| acc + v), 10);

        let seq = Sequence::new(vec![1, 2, 3]);
        assert_eq!(reduce_with_initial(&seq, 10, |acc, v| acc + v), 16);
    }

    #[test]
    fn reduce_with_initial_can_change_accumulator_type() {
        let seq = Sequence::new(vec![1, 2, 3]);
        let rendered = reduce_with_initial(&seq, String::new(), |acc, v| acc + &v.to_string());
        assert_eq!(rendered, "123");
    }
}
