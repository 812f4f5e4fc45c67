use sequence_ops::optional::OptionalValue;
use sequence_ops::processing::{
    count, distinct, filter, flat_map, join, limit, map, min, peek, reduce, reduce_with_initial,
    sorted, sum,
};
use sequence_ops::types::Sequence;

fn integers() -> Sequence<i64> {
    Sequence::new(vec![3, 2, 2, 3, 7, 3, 5])
}

#[test]
fn map_identity_is_the_same_sequence() {
    let seq = integers();
    assert_eq!(map(&seq, |v| *v), seq);
}

#[test]
fn filter_and_complement_cover_the_whole_sequence() {
    let seq = integers();
    let even = filter(&seq, |v| v % 2 == 0);
    let odd = filter(&seq, |v| v % 2 != 0);

    assert_eq!(count(&even) + count(&odd), count(&seq));
    assert_eq!(even.items, vec![2, 2]);
    assert_eq!(odd.items, vec![3, 3, 7, 3, 5]);
}

#[test]
fn reduce_matches_documented_empty_and_singleton_behavior() {
    let empty: Sequence<i64> = Sequence::empty();
    assert_eq!(reduce(&empty, |x, y| x + y), OptionalValue::Absent);

    let singleton = Sequence::new(vec![9]);
    assert_eq!(reduce(&singleton, |x, y| x + y), OptionalValue::Present(9));
}

#[test]
fn aggregate_values_over_the_shared_fixture() {
    let seq = integers();
    assert_eq!(sum(&seq), 25);
    assert_eq!(min(&seq, |a, b| a.cmp(b)), OptionalValue::Present(2));
    assert_eq!(
        reduce(&seq, |x, y| if x <= *y { x } else { *y }),
        OptionalValue::Present(2)
    );
}

#[test]
fn peek_limit_distinct_pipeline() {
    // Inspect every element eagerly, keep the first three, then dedupe.
    let seq = Sequence::new(vec![1, 1, 3, 2, 4, 3]);
    let mut inspected = Vec::new();

    let first_three = limit(&peek(&seq, |v| inspected.push(*v)), 3).unwrap();
    let deduped = distinct(&first_three);

    assert_eq!(inspected, vec![1, 1, 3, 2, 4, 3]);
    assert_eq!(first_three.items, vec![1, 1, 3]);
    assert_eq!(deduped.items, vec![1, 3]);
}

#[test]
fn distinct_keeps_first_occurrences() {
    let seq = Sequence::new(vec![1, 1, 3, 2, 4, 3]);
    assert_eq!(distinct(&seq).items, vec![1, 3, 2, 4]);
}

#[test]
fn flat_map_flattens_per_key_phone_lists() {
    let directory = Sequence::new(vec![
        ("John", vec!["555-1123", "555-3389"]),
        ("Mary", vec!["555-2243", "555-5264"]),
    ]);

    let phones = flat_map(&directory, |(_, numbers)| Sequence::new(numbers.clone()));
    assert_eq!(count(&phones), 4);
    assert_eq!(
        join(&phones, ", "),
        "555-1123, 555-3389, 555-2243, 555-5264"
    );
}

#[test]
fn sorted_then_joined_renders_a_report_line() {
    let names = Sequence::new(vec!["John", "Alice", "Bob", "Emily"]);
    let ordered = sorted(&names, |a, b| a.cmp(b));
    assert_eq!(join(&ordered, ", "), "Alice, Bob, Emily, John");
}

#[test]
fn reduce_with_initial_differs_from_reduce_on_empty_input() {
    let empty: Sequence<i64> = Sequence::empty();
    assert_eq!(reduce_with_initial(&empty, 100, |acc, v| acc + v), 100);
    assert!(reduce(&empty, |x, y| x + y).is_absent());
}

#[test]
fn operations_never_mutate_their_input() {
    let seq = integers();
    let snapshot = seq.clone();

    let _ = map(&seq, |v| v * 2);
    let _ = filter(&seq, |v| *v > 2);
    let _ = distinct(&seq);
    let _ = sorted(&seq, |a, b| a.cmp(b));
    let _ = limit(&seq, 2).unwrap();

    assert_eq!(seq, snapshot);
}
