//! Terminal operations for the seqweld library.
//!
//! Sinks are eager: each one drives a sequence until it is exhausted (or, for
//! [`nth`], until the requested element turns up) and returns a single
//! aggregate. Calling one on an unbounded sequence never returns; bound it
//! first with [`take`](crate::traits::SequenceExt::take).

pub mod collectors;

use std::collections::HashMap;
use std::hash::Hash;

use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::traits::{Sequence, Step};

pub use collectors::Collector;

/// Fold every value into an accumulator, left to right.
///
/// # Examples
///
/// ```rust
/// use seqweld::prelude::*;
/// use seqweld::sinks::reduce;
///
/// let total = reduce(naturals().take(101), |acc, n| acc + n, 0);
/// assert_eq!(total, 5050);
/// ```
pub fn reduce<S, F, U>(mut seq: S, mut f: F, init: U) -> U
where
    S: Sequence,
    F: FnMut(U, S::Item) -> U,
{
    let mut acc = init;
    while let Step::Value(item) = seq.advance() {
        acc = f(acc, item);
    }
    acc
}

/// Add up every value, starting from zero
pub fn sum<S>(seq: S) -> S::Item
where
    S: Sequence,
    S::Item: Zero,
{
    reduce(seq, |acc, item| acc + item, <S::Item as Zero>::zero())
}

/// Multiply every value, starting from one
pub fn product<S>(seq: S) -> S::Item
where
    S: Sequence,
    S::Item: One,
{
    reduce(seq, |acc, item| acc * item, <S::Item as One>::one())
}

/// Count the values a sequence produces
pub fn count<S: Sequence>(seq: S) -> usize {
    reduce(seq, |acc, _| acc + 1, 0)
}

/// Return the value at zero-based index `n`.
///
/// Only the first `n + 1` values are consumed. Fails with
/// [`Error::IndexOutOfRange`] if the sequence runs out first.
pub fn nth<S: Sequence>(mut seq: S, n: usize) -> Result<S::Item> {
    let mut index = 0;
    while let Step::Value(item) = seq.advance() {
        if index == n {
            return Ok(item);
        }
        index += 1;
    }

    debug_event!(index = n, len = index, "nth ran past the end of the sequence");
    Err(Error::index_out_of_range(n, index))
}

/// Return the final value, if there is one
pub fn last<S: Sequence>(seq: S) -> Option<S::Item> {
    reduce(seq, |_, item| Some(item), None)
}

/// Call a function on every value
pub fn for_each<S, F>(seq: S, mut f: F)
where
    S: Sequence,
    F: FnMut(S::Item),
{
    reduce(seq, |(), item| f(item), ())
}

/// Count how many times each distinct value occurs
pub fn occurrences<S>(seq: S) -> HashMap<S::Item, usize>
where
    S: Sequence,
    S::Item: Hash + Eq,
{
    let counts = reduce(
        seq,
        |mut counts: HashMap<S::Item, usize>, item| {
            *counts.entry(item).or_insert(0) += 1;
            counts
        },
        HashMap::new(),
    );
    trace_event!(distinct = counts.len(), "counted occurrences");
    counts
}

/// Drain every value into a vector, in production order
pub fn to_array<S: Sequence>(seq: S) -> Vec<S::Item> {
    let items = reduce(
        seq,
        |mut items: Vec<S::Item>, item| {
            items.push(item);
            items
        },
        Vec::new(),
    );
    trace_event!(len = items.len(), "drained sequence into array");
    items
}

/// Drain a sequence of pairs into a map; later keys overwrite earlier ones
pub fn to_map<S, K, V>(seq: S) -> HashMap<K, V>
where
    S: Sequence<Item = (K, V)>,
    K: Hash + Eq,
{
    let map = reduce(
        seq,
        |mut map: HashMap<K, V>, (key, value)| {
            map.insert(key, value);
            map
        },
        HashMap::new(),
    );
    trace_event!(len = map.len(), "drained sequence into map");
    map
}

/// Hand the sequence to a [`Collector`] and return whatever it builds
pub fn collect<S, C>(seq: S, collector: C) -> C::Output
where
    S: Sequence,
    C: Collector<S>,
{
    collector.collect(seq)
}
