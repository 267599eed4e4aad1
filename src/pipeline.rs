//! Fluent pipeline construction.
//!
//! [`Pipeline`] owns a single sequence and re-exposes the combinators and
//! terminals as chainable methods, so a pipeline reads left to right:
//!
//! ```rust
//! use seqweld::prelude::*;
//!
//! let thirds = wrap(naturals())
//!     .filter(|n| n % 3 == 0)
//!     .take(4)
//!     .collect(collectors::ARRAY);
//! assert_eq!(thirds, vec![0, 3, 6, 9]);
//! ```
//!
//! Every chaining method consumes the pipeline and returns a new one, so a
//! stage can only be consumed once.

use std::collections::HashMap;
use std::hash::Hash;

use num_traits::{One, Zero};

use crate::error::Result;
use crate::sinks::{self, Collector};
use crate::traits::{
    Enumerate, Filter, Fuse, Inspect, Map, Peek, Peekable, Sequence, SequenceExt, Skip, Step,
    Take, Zip,
};
use crate::util::SequenceIter;

/// A chainable wrapper around one owned sequence.
pub struct Pipeline<S> {
    seq: S,
}

/// Start a pipeline from a sequence
pub fn wrap<S: Sequence>(seq: S) -> Pipeline<S> {
    Pipeline::new(seq)
}

impl<S: Sequence> Pipeline<S> {
    /// Create a new pipeline
    pub fn new(seq: S) -> Self {
        Self { seq }
    }

    /// Release the underlying sequence
    pub fn raw(self) -> S {
        self.seq
    }

    /// Map values through a function
    pub fn map<F, U>(self, f: F) -> Pipeline<Map<S, F>>
    where
        F: FnMut(S::Item) -> U,
    {
        Pipeline::new(self.seq.map(f))
    }

    /// Keep only values matching a predicate
    pub fn filter<F>(self, predicate: F) -> Pipeline<Filter<S, F>>
    where
        F: FnMut(&S::Item) -> bool,
    {
        Pipeline::new(self.seq.filter(predicate))
    }

    /// Take only the first n values
    pub fn take(self, n: usize) -> Pipeline<Take<S>> {
        Pipeline::new(self.seq.take(n))
    }

    /// Skip the first n values
    pub fn drop(self, n: usize) -> Pipeline<Skip<S>> {
        Pipeline::new(SequenceExt::drop(self.seq, n))
    }

    /// Pair each value with its index
    pub fn enumerate(self) -> Pipeline<Enumerate<S>> {
        Pipeline::new(self.seq.enumerate())
    }

    /// Pair values with another sequence (or pipeline)
    pub fn zip<B: Sequence>(self, other: B) -> Pipeline<Zip<S, B>> {
        Pipeline::new(self.seq.zip(other))
    }

    /// Buffer one value ahead; see [`Pipeline::peek`]
    pub fn peekable(self) -> Pipeline<Peekable<S>> {
        Pipeline::new(self.seq.peekable())
    }

    /// Make exhaustion permanent
    pub fn fuse(self) -> Pipeline<Fuse<S>> {
        Pipeline::new(self.seq.fuse())
    }

    /// Observe values as they pass
    pub fn inspect<F>(self, f: F) -> Pipeline<Inspect<S, F>>
    where
        F: FnMut(&S::Item),
    {
        Pipeline::new(self.seq.inspect(f))
    }

    /// Fold all values into an accumulator
    pub fn reduce<F, U>(self, f: F, init: U) -> U
    where
        F: FnMut(U, S::Item) -> U,
    {
        sinks::reduce(self.seq, f, init)
    }

    /// Sum all values
    pub fn sum(self) -> S::Item
    where
        S::Item: Zero,
    {
        sinks::sum(self.seq)
    }

    /// Multiply all values
    pub fn product(self) -> S::Item
    where
        S::Item: One,
    {
        sinks::product(self.seq)
    }

    /// Count the values
    pub fn count(self) -> usize {
        sinks::count(self.seq)
    }

    /// Get the value at a zero-based index
    pub fn nth(self, n: usize) -> Result<S::Item> {
        sinks::nth(self.seq, n)
    }

    /// Get the final value
    pub fn last(self) -> Option<S::Item> {
        sinks::last(self.seq)
    }

    /// Run a function on every value
    pub fn for_each<F>(self, f: F)
    where
        F: FnMut(S::Item),
    {
        sinks::for_each(self.seq, f)
    }

    /// Count occurrences of each distinct value
    pub fn occurrences(self) -> HashMap<S::Item, usize>
    where
        S::Item: Hash + Eq,
    {
        sinks::occurrences(self.seq)
    }

    /// Drain into a vector
    pub fn to_array(self) -> Vec<S::Item> {
        sinks::to_array(self.seq)
    }

    /// Drain pairs into a map
    pub fn to_map<K, V>(self) -> HashMap<K, V>
    where
        S: Sequence<Item = (K, V)>,
        K: Hash + Eq,
    {
        sinks::to_map(self.seq)
    }

    /// Drain with a collector
    pub fn collect<C>(self, collector: C) -> C::Output
    where
        C: Collector<S>,
    {
        sinks::collect(self.seq, collector)
    }
}

impl<S: Peek> Pipeline<S> {
    /// Look at the next value without consuming it
    pub fn peek(&self) -> Option<&S::Item> {
        self.seq.peek()
    }
}

impl<S: Sequence> Sequence for Pipeline<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        self.seq.advance()
    }
}

impl<S: Sequence> IntoIterator for Pipeline<S> {
    type Item = S::Item;
    type IntoIter = SequenceIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIter::new(self.seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sinks::collectors;
    use crate::sources::{from_collection, naturals, range};

    #[test]
    fn test_chained_pipeline() {
        let thirds = wrap(naturals())
            .filter(|n| n % 3 == 0)
            .take(1000)
            .collect(collectors::ARRAY);

        assert_eq!(thirds.len(), 1000);
        assert_eq!(thirds[999], 2997);
    }

    #[test]
    fn test_zip_pipelines_into_map() {
        let odds = wrap(naturals()).filter(|n| n % 2 == 1).take(1000).raw();
        let pairs = wrap(wrap(naturals()).filter(|n| n % 2 == 0).take(1000).zip(odds))
            .collect(collectors::MAP);

        assert_eq!(pairs.len(), 1000);
        assert_eq!(pairs[&0], 1);
        assert_eq!(pairs[&1998], 1999);
    }

    #[test]
    fn test_zip_accepts_pipeline() {
        let zipped = wrap(range(0, 3)).zip(wrap(naturals())).to_array();
        assert_eq!(zipped, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_peek() {
        let mut peekable = wrap(naturals()).peekable();
        assert_eq!(peekable.peek(), Some(&0));
        assert_eq!(peekable.peek(), Some(&0));
        assert_eq!(peekable.advance(), Step::Value(0));
        assert_eq!(peekable.peek(), Some(&1));
    }

    #[test]
    fn test_terminals() {
        assert_eq!(wrap(naturals()).take(101).sum(), 5050);
        assert_eq!(wrap(range(1, 7)).product(), 720);
        assert_eq!(wrap(naturals()).take(100).count(), 100);
        assert_eq!(wrap(naturals()).take(100).nth(99), Ok(99));
        assert_eq!(
            wrap(naturals()).take(5).nth(10),
            Err(Error::IndexOutOfRange { index: 10, len: 5 })
        );
        assert_eq!(wrap(range(0, 4)).last(), Some(3));
        assert_eq!(wrap(range(1, 4)).reduce(|acc, n| acc * 10 + n, 0), 123);
    }

    #[test]
    fn test_drop_and_enumerate() {
        let indexed = wrap(naturals()).take(10).drop(7).enumerate().to_array();
        assert_eq!(indexed, vec![(0, 7), (1, 8), (2, 9)]);
    }

    #[test]
    fn test_occurrences_and_to_map() {
        let counts = wrap(from_collection(vec![1, 2, 1, 3, 1])).occurrences();
        assert_eq!(counts[&1], 3);
        assert_eq!(counts[&2], 1);

        let map = wrap(from_collection(vec![("k", 1), ("k", 2)])).to_map();
        assert_eq!(map["k"], 2);
    }

    #[test]
    fn test_into_iterator() {
        let mut seen = Vec::new();
        for n in wrap(range(0, 3)).map(|n| n * 2) {
            seen.push(n);
        }
        assert_eq!(seen, vec![0, 2, 4]);
    }

    #[test]
    fn test_for_each_and_inspect() {
        let mut inspected = 0;
        let mut total = 0;
        wrap(range(1, 5))
            .inspect(|_| inspected += 1)
            .fuse()
            .for_each(|n| total += n);
        assert_eq!(inspected, 4);
        assert_eq!(total, 10);
    }
}
