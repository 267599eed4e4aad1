//! Free-function combinators for the seqweld library.
//!
//! Each function takes ownership of its upstream sequence and returns a new
//! sequence that transforms it lazily. They are the prefix-call spelling of
//! the [`SequenceExt`] methods, for callers who prefer
//! `filter(map(seq, f), p)` to method chains.

use crate::traits::{
    Enumerate, Filter, Fuse, Inspect, Map, Peekable, Sequence, SequenceExt, Skip, Take, Zip,
};

/// Apply `f` to every value
pub fn map<S, F, U>(seq: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    seq.map(f)
}

/// Keep only the values for which `predicate` holds
pub fn filter<S, F>(seq: S, predicate: F) -> Filter<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    seq.filter(predicate)
}

/// Yield at most `n` values
pub fn take<S: Sequence>(seq: S, n: usize) -> Take<S> {
    seq.take(n)
}

/// Skip the first `n` values
pub fn drop<S: Sequence>(seq: S, n: usize) -> Skip<S> {
    SequenceExt::drop(seq, n)
}

/// Pair each value with its zero-based index
pub fn enumerate<S: Sequence>(seq: S) -> Enumerate<S> {
    seq.enumerate()
}

/// Pair up two sequences, stopping as soon as either runs out
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    a.zip(b)
}

/// Buffer one value ahead
pub fn peekable<S: Sequence>(seq: S) -> Peekable<S> {
    seq.peekable()
}

/// Make exhaustion permanent
pub fn fuse<S: Sequence>(seq: S) -> Fuse<S> {
    seq.fuse()
}

/// Observe each value by reference as it passes
pub fn inspect<S, F>(seq: S, f: F) -> Inspect<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    seq.inspect(f)
}
