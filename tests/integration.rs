//! Integration tests for the lazy sequence combinators

use std::collections::HashMap;

use seqweld::prelude::*;
use seqweld::processors::{drop, enumerate, filter, map, take, zip};
use seqweld::sinks::{count, nth, occurrences, product, reduce, sum, to_array, to_map};

#[test]
fn test_range() {
    assert_eq!(to_array(range(0, 5)), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_naturals() {
    assert_eq!(to_array(take(naturals(), 10)), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_map() {
    assert_eq!(to_array(map(range(0, 5), |x| x * x)), vec![0, 1, 4, 9, 16]);
}

#[test]
fn test_count_of_take() {
    for n in 0..50 {
        assert_eq!(count(take(naturals(), n)), n);
    }
}

#[test]
fn test_collection_round_trip() {
    let inputs: Vec<Vec<String>> = vec![
        vec![],
        vec!["only".to_string()],
        vec!["b".to_string(), "a".to_string(), "b".to_string()],
    ];
    for items in inputs {
        assert_eq!(to_array(from_collection(items.clone())), items);
    }
}

#[test]
fn test_sum_and_product() {
    assert_eq!(sum(take(naturals(), 101)), 5050);
    assert_eq!(product(range(1, 7)), 720);
    assert_eq!(reduce(take(naturals(), 101), |acc, n| acc + n, 0), 5050);
}

#[test]
fn test_filter_preserves_order_and_predicate() {
    let source = vec![5, 12, 7, 3, 20, 8, 1, 14];
    let is_big = |x: &i32| *x >= 7;

    let kept = to_array(filter(from_collection(source.clone()), is_big));

    assert!(kept.iter().all(is_big));
    let expected: Vec<i32> = source.into_iter().filter(is_big).collect();
    assert_eq!(kept, expected);
}

#[test]
fn test_drop() {
    assert_eq!(to_array(drop(take(naturals(), 10), 5)), vec![5, 6, 7, 8, 9]);
    for n in 0..15 {
        assert_eq!(count(drop(take(naturals(), 10), n)), 10usize.saturating_sub(n));
    }
}

#[test]
fn test_zip_count_is_min() {
    for a in 0..6 {
        for b in 0..6 {
            let zipped = zip(take(naturals(), a), take(naturals(), b));
            assert_eq!(count(zipped), a.min(b));
        }
    }
}

#[test]
fn test_nth() {
    assert_eq!(nth(take(naturals(), 100), 99), Ok(99));

    let err = nth(take(naturals(), 5), 10).unwrap_err();
    assert_eq!(err, Error::IndexOutOfRange { index: 10, len: 5 });
    assert_eq!(err.to_string(), "index 10 out of range for sequence of length 5");
}

#[test]
fn test_enumerate() {
    assert_eq!(
        to_array(enumerate(take(naturals(), 5))),
        vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]
    );
}

#[test]
fn test_occurrences() {
    let expected: HashMap<u64, usize> = [(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)].into();
    assert_eq!(occurrences(take(naturals(), 5)), expected);
}

#[test]
fn test_to_map() {
    let map = to_map(zip(range(0, 3), from_collection(vec!["a", "b", "c"])));
    assert_eq!(map, HashMap::from([(0, "a"), (1, "b"), (2, "c")]));
}

#[test]
fn test_exhaustion_is_idempotent() {
    let mut sequences: Vec<BoxSequence<'static, u64>> = vec![
        take(naturals(), 3).boxed(),
        drop(take(naturals(), 3), 1).boxed(),
        filter(take(naturals(), 6), |n| n % 4 == 0).boxed(),
        map(zip(take(naturals(), 2), naturals()), |(a, b)| a + b).boxed(),
        from_collection(vec![1u64, 2]).peekable().boxed(),
    ];

    for seq in sequences.iter_mut() {
        while seq.advance().is_value() {}
        assert_eq!(seq.advance(), Step::Done);
        assert_eq!(seq.advance(), Step::Done);
    }
}

#[test]
fn test_peek_is_stable() {
    let mut peekable = naturals().drop(3).peekable();
    assert_eq!(peekable.peek(), Some(&3));
    assert_eq!(peekable.peek(), Some(&3));
    assert_eq!(peekable.advance(), Step::Value(3));
    assert_eq!(peekable.peek(), Some(&4));
}

#[test]
fn test_fluent_pipeline() {
    let evens = wrap(naturals()).filter(|n| n % 2 == 0).take(1000);
    let odds = wrap(naturals()).filter(|n| n % 2 == 1).take(1000).raw();

    let pairs = evens.zip(odds).collect(collectors::MAP);
    assert_eq!(pairs.len(), 1000);
    assert!(pairs.iter().all(|(even, odd)| even + 1 == *odd));

    assert_eq!(wrap(naturals()).peekable().peek(), Some(&0));
}

#[test]
fn test_pipeline_matches_free_functions() {
    let data: Vec<f64> = (0..1000).map(|n| (n as f64) / 997.0).collect();

    let expected: i64 = data
        .iter()
        .map(|x| x * 1000.0)
        .map(|x| x.floor() as i64)
        .filter(|x| x % 2 == 0)
        .sum();

    let nested = sum(filter(
        map(map(from_collection(data.clone()), |x| x * 1000.0), |x| x.floor() as i64),
        |x| x % 2 == 0,
    ));

    let fluent = wrap(from_collection(data))
        .map(|x| x * 1000.0)
        .map(|x| x.floor() as i64)
        .filter(|x| x % 2 == 0)
        .reduce(|acc, item| acc + item, 0);

    assert_eq!(nested, expected);
    assert_eq!(fluent, expected);
}
