//! Side-effecting element visitors for [`crate::types::Sequence`].
//!
//! These are the only operations in the crate whose purpose is a caller-side
//! effect (printing, collecting into external state). They still visit
//! strictly in order and never mutate the sequence.

use crate::types::Sequence;

/// Invoke `consumer` for every element, in order.
pub fn for_each<T, F>(seq: &Sequence<T>, consumer: F)
where
    F: FnMut(&T),
{
    seq.iter().for_each(consumer);
}

/// Invoke `inspector` for every element, in order, and return the sequence
/// unchanged so the call chains inside a pipeline.
///
/// Unlike a lazy stream peek, inspection happens immediately for the whole
/// sequence.
pub fn peek<T, F>(seq: &Sequence<T>, inspector: F) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T),
{
    seq.iter().for_each(inspector);
    seq.clone()
}

#[cfg(test)]
mod tests {
    use super::{for_each, peek};
    use crate::processing::{distinct, limit};
    use crate::types::Sequence;

    #[test]
    fn for_each_visits_every_element_in_order() {
        let cities = Sequence::new(vec!["Delhi", "Mumbai", "Goa", "Pune"]);
        let mut seen = Vec::new();
        for_each(&cities, |city| seen.push(*city));
        assert_eq!(seen, cities.items);
    }

    #[test]
    fn peek_returns_the_sequence_unchanged() {
        let seq = Sequence::new(vec![1, 1, 3, 2, 4, 3]);
        let mut seen = Vec::new();

        let out = peek(&seq, |v| seen.push(*v));
        assert_eq!(out, seq);
        assert_eq!(seen, vec![1, 1, 3, 2, 4, 3]);
    }

    #[test]
    fn peek_chains_inside_a_pipeline() {
        let seq = Sequence::new(vec![1, 1, 3, 2, 4, 3]);
        let mut seen = Vec::new();

        let out = distinct(&limit(&peek(&seq, |v| seen.push(*v)), 3).unwrap());

        assert_eq!(seen, vec![1, 1, 3, 2, 4, 3]);
        assert_eq!(out.items, vec![1, 3]);
    }
}
