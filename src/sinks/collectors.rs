//! Named collection strategies.
//!
//! A [`Collector`] turns a whole sequence into one aggregate. Passing one to
//! [`collect`](super::collect) keeps the terminal call independent of the
//! shape being built.

use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::Sequence;

/// A strategy that drains a sequence into an aggregate.
pub trait Collector<S: Sequence> {
    /// The aggregate this collector builds
    type Output;

    /// Consume the sequence and build the aggregate
    fn collect(self, seq: S) -> Self::Output;
}

/// Collects values into a `Vec`, in production order
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayCollector;

/// Collects `(key, value)` pairs into a `HashMap`; later keys win
#[derive(Debug, Clone, Copy, Default)]
pub struct MapCollector;

/// Drain to an ordered list
pub const ARRAY: ArrayCollector = ArrayCollector;

/// Drain pairs to a mapping
pub const MAP: MapCollector = MapCollector;

impl<S: Sequence> Collector<S> for ArrayCollector {
    type Output = Vec<S::Item>;

    fn collect(self, seq: S) -> Self::Output {
        super::to_array(seq)
    }
}

impl<S, K, V> Collector<S> for MapCollector
where
    S: Sequence<Item = (K, V)>,
    K: Hash + Eq,
{
    type Output = HashMap<K, V>;

    fn collect(self, seq: S) -> Self::Output {
        super::to_map(seq)
    }
}

/// A collector backed by a function
#[derive(Debug, Clone, Copy)]
pub struct FnCollector<F> {
    f: F,
}

/// Use a function as a collector
pub fn collector_fn<F>(f: F) -> FnCollector<F> {
    FnCollector { f }
}

impl<S, F, U> Collector<S> for FnCollector<F>
where
    S: Sequence,
    F: FnOnce(S) -> U,
{
    type Output = U;

    fn collect(self, seq: S) -> Self::Output {
        (self.f)(seq)
    }
}
