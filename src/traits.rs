//! Core traits for the sequence system.
//!
//! This module defines the pull-based [`Sequence`] abstraction that every
//! generator and combinator implements, the [`Step`] type it returns, and the
//! [`SequenceExt`] extension trait that composes sequences left-to-right.

/// Result of advancing a sequence: either the next value or exhaustion.
///
/// # Examples
///
/// ```rust
/// use seqweld::traits::Step;
///
/// let next: Step<i32> = Step::Value(42);
/// assert_eq!(next.map(|x| x * 2), Step::Value(84));
/// assert_eq!(Step::<i32>::Done.value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step<T> {
    /// The sequence is exhausted, permanently
    Done,
    /// The next value in production order
    Value(T),
}

impl<T> Step<T> {
    /// Returns `true` if the step is `Done`.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }

    /// Returns `true` if the step carries a value.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Step::Value(_))
    }

    /// Converts from `Step<T>` to `Option<T>`.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Step::Value(value) => Some(value),
            Step::Done => None,
        }
    }

    /// Converts from `&Step<T>` to `Step<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&T> {
        match self {
            Step::Value(value) => Step::Value(value),
            Step::Done => Step::Done,
        }
    }

    /// Maps the carried value, leaving `Done` untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Value(value) => Step::Value(f(value)),
            Step::Done => Step::Done,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Step::Value(value),
            None => Step::Done,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    fn from(step: Step<T>) -> Self {
        step.value()
    }
}

/// A stateful, single-owner cursor over a possibly infinite series of values.
///
/// Sequences are pull-based: nothing is computed until [`advance`] is called,
/// and each call computes just enough to produce one value.
///
/// Implementations must keep exhaustion permanent: once `advance` returns
/// [`Step::Done`], every later call returns `Done` as well. Every generator
/// and combinator in this crate upholds this as long as its upstream does.
/// Wrap a foreign sequence in [`SequenceExt::fuse`] if it might not.
///
/// [`advance`]: Sequence::advance
///
/// # Examples
///
/// ```rust
/// use seqweld::traits::{Sequence, Step};
///
/// struct Countdown(u32);
///
/// impl Sequence for Countdown {
///     type Item = u32;
///
///     fn advance(&mut self) -> Step<Self::Item> {
///         if self.0 == 0 {
///             return Step::Done;
///         }
///         self.0 -= 1;
///         Step::Value(self.0)
///     }
/// }
///
/// let mut countdown = Countdown(2);
/// assert_eq!(countdown.advance(), Step::Value(1));
/// assert_eq!(countdown.advance(), Step::Value(0));
/// assert_eq!(countdown.advance(), Step::Done);
/// ```
pub trait Sequence {
    /// The type of values this sequence produces
    type Item;

    /// Produce the next value, or `Done` if the sequence is exhausted.
    fn advance(&mut self) -> Step<Self::Item>;
}

/// A sequence that can show its next value without consuming it.
///
/// Only [`Peekable`] implements this; call [`SequenceExt::peekable`] to get one.
pub trait Peek: Sequence {
    /// The value the next [`Sequence::advance`] will return, if any.
    fn peek(&self) -> Option<&Self::Item>;
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

/// A type-erased, heap-allocated sequence.
pub type BoxSequence<'a, T> = Box<dyn Sequence<Item = T> + 'a>;

/// Extension trait for composing sequences with combinators.
///
/// Every method takes `self` by value: the returned combinator owns its
/// upstream, so a sequence can only ever feed one consumer.
pub trait SequenceExt: Sequence + Sized {
    /// Map values through a function
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map { seq: self, f }
    }

    /// Keep only values matching a predicate
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Filter {
            seq: self,
            predicate,
        }
    }

    /// Yield at most the first `n` values
    fn take(self, n: usize) -> Take<Self> {
        Take {
            seq: self,
            remaining: n,
        }
    }

    /// Discard the first `n` values, then pass the rest through
    fn drop(self, n: usize) -> Skip<Self> {
        Skip {
            seq: self,
            remaining: n,
        }
    }

    /// Pair each value with its zero-based position
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate {
            seq: self,
            index: 0,
        }
    }

    /// Pair values with another sequence until either side runs out
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        B: Sequence,
    {
        Zip {
            a: self,
            b: other,
            done: false,
        }
    }

    /// Buffer one value ahead so it can be inspected with [`Peek::peek`]
    fn peekable(self) -> Peekable<Self> {
        Peekable::new(self)
    }

    /// Guarantee that exhaustion is permanent
    fn fuse(self) -> Fuse<Self> {
        Fuse {
            seq: self,
            done: false,
        }
    }

    /// Call a function on each value as it passes through
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        Inspect { seq: self, f }
    }

    /// Adapt this sequence into a standard [`Iterator`]
    fn into_iter_seq(self) -> crate::util::SequenceIter<Self> {
        crate::util::SequenceIter::new(self)
    }

    /// Erase the concrete type behind a box
    fn boxed<'a>(self) -> BoxSequence<'a, Self::Item>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<S: Sequence> SequenceExt for S {}

// Combinator state lives here; the `Sequence` impls are in the impls module.

/// Sequence returned by [`SequenceExt::map`].
pub struct Map<S, F> {
    pub(crate) seq: S,
    pub(crate) f: F,
}

/// Sequence returned by [`SequenceExt::filter`].
pub struct Filter<S, F> {
    pub(crate) seq: S,
    pub(crate) predicate: F,
}

/// Sequence returned by [`SequenceExt::take`].
pub struct Take<S> {
    pub(crate) seq: S,
    pub(crate) remaining: usize,
}

/// Sequence returned by [`SequenceExt::drop`].
pub struct Skip<S> {
    pub(crate) seq: S,
    pub(crate) remaining: usize,
}

/// Sequence returned by [`SequenceExt::enumerate`].
pub struct Enumerate<S> {
    pub(crate) seq: S,
    pub(crate) index: usize,
}

/// Sequence returned by [`SequenceExt::zip`].
pub struct Zip<A, B> {
    pub(crate) a: A,
    pub(crate) b: B,
    pub(crate) done: bool,
}

/// Sequence returned by [`SequenceExt::peekable`].
pub struct Peekable<S: Sequence> {
    pub(crate) seq: S,
    pub(crate) peeked: Step<S::Item>,
}

/// Sequence returned by [`SequenceExt::fuse`].
pub struct Fuse<S> {
    pub(crate) seq: S,
    pub(crate) done: bool,
}

/// Sequence returned by [`SequenceExt::inspect`].
pub struct Inspect<S, F> {
    pub(crate) seq: S,
    pub(crate) f: F,
}
