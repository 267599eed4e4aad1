//! Source implementations for the seqweld library.
//!
//! Sources are the leaves of a pipeline: sequences with no upstream that
//! generate values on demand.

use std::collections::VecDeque;

use num_traits::{CheckedAdd, One};

use crate::traits::{Sequence, Step};

/// A source that counts from `start` by `step`, stopping before `end`.
///
/// Without an end the range is unbounded. The step is never checked: a zero
/// or negative step on a bounded range never reaches its end, which is the
/// caller's concern. Stepping past the largest value of `T` ends the range
/// after the last representable value instead of overflowing.
///
/// # Examples
///
/// ```rust
/// use seqweld::prelude::*;
///
/// let odds = RangeSource::new(1).until(10).step(2);
/// assert_eq!(seqweld::sinks::to_array(odds), vec![1, 3, 5, 7, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct RangeSource<T> {
    cursor: Option<T>,
    end: Option<T>,
    step: T,
}

impl<T: One> RangeSource<T> {
    /// Create an unbounded range starting at `start` with a step of one
    pub fn new(start: T) -> Self {
        Self {
            cursor: Some(start),
            end: None,
            step: T::one(),
        }
    }
}

impl<T> RangeSource<T> {
    /// Stop before reaching `end`
    pub fn until(mut self, end: T) -> Self {
        self.end = Some(end);
        self
    }

    /// Advance by `step` instead of one
    pub fn step(mut self, step: T) -> Self {
        self.step = step;
        self
    }
}

impl<T> Sequence for RangeSource<T>
where
    T: Copy + PartialOrd + CheckedAdd,
{
    type Item = T;

    fn advance(&mut self) -> Step<Self::Item> {
        let Some(item) = self.cursor else {
            return Step::Done;
        };
        if let Some(end) = self.end {
            if !(item < end) {
                self.cursor = None;
                return Step::Done;
            }
        }
        // `None` once the next value would overflow `T`
        self.cursor = item.checked_add(&self.step);
        Step::Value(item)
    }
}

/// A source that yields `0, 1, 2, ...` and never runs out
#[derive(Debug, Clone, Default)]
pub struct Naturals {
    next: u64,
}

impl Naturals {
    /// Create a new counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sequence for Naturals {
    type Item = u64;

    fn advance(&mut self) -> Step<Self::Item> {
        let item = self.next;
        self.next += 1;
        Step::Value(item)
    }
}

/// A source that yields items from an owned snapshot of a collection
#[derive(Debug, Clone)]
pub struct CollectionSource<T> {
    items: VecDeque<T>,
}

impl<T> CollectionSource<T> {
    /// Create a new collection source
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Check if the source has more items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of remaining items
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Sequence for CollectionSource<T> {
    type Item = T;

    fn advance(&mut self) -> Step<Self::Item> {
        self.items.pop_front().into()
    }
}

/// A source that pulls from a standard [`Iterator`]
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: std::iter::Fuse<I>,
}

impl<I: Iterator> IterSource<I> {
    /// Create a new iterator source
    pub fn new(iter: I) -> Self {
        Self { iter: iter.fuse() }
    }
}

impl<I: Iterator> Sequence for IterSource<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        self.iter.next().into()
    }
}

/// Count from `start` up to, but not including, `end`
pub fn range<T: One>(start: T, end: T) -> RangeSource<T> {
    RangeSource::new(start).until(end)
}

/// Count from `start` without bound
pub fn range_from<T: One>(start: T) -> RangeSource<T> {
    RangeSource::new(start)
}

/// The natural numbers, starting at zero
pub fn naturals() -> Naturals {
    Naturals::new()
}

/// Yield every item of a collection in order.
///
/// The items are moved into the source up front, so later changes to
/// wherever they came from are not observed.
pub fn from_collection<T, I>(items: I) -> CollectionSource<T>
where
    I: IntoIterator<Item = T>,
{
    CollectionSource::new(items.into_iter().collect())
}

/// Pull lazily from any iterable
pub fn from_iter<I>(iter: I) -> IterSource<I::IntoIter>
where
    I: IntoIterator,
{
    IterSource::new(iter.into_iter())
}
