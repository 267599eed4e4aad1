//! Utility functions and helper types.
//!
//! Bridges between [`Sequence`] and the standard library's [`Iterator`] (and,
//! with the `stream` feature, `futures_core::Stream`), plus a closure-backed
//! source.

use crate::traits::{Sequence, Step};

/// Helper function to create a simple source from a function.
///
/// The function is called once per advance; the first `None` ends the
/// sequence and the function is never called again.
///
/// # Examples
///
/// ```rust
/// use seqweld::util::from_fn;
/// use seqweld::sinks::to_array;
///
/// let mut n = 1;
/// let powers = from_fn(move || {
///     let item = n;
///     n *= 2;
///     (item < 100).then_some(item)
/// });
/// assert_eq!(to_array(powers), vec![1, 2, 4, 8, 16, 32, 64]);
/// ```
pub fn from_fn<F, T>(f: F) -> FnSource<F>
where
    F: FnMut() -> Option<T>,
{
    FnSource { f: Some(f) }
}

/// A source created from a function
pub struct FnSource<F> {
    f: Option<F>,
}

impl<F, T> Sequence for FnSource<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn advance(&mut self) -> Step<Self::Item> {
        let Some(f) = self.f.as_mut() else {
            return Step::Done;
        };
        match f() {
            Some(item) => Step::Value(item),
            None => {
                self.f = None;
                Step::Done
            }
        }
    }
}

/// An [`Iterator`] that drives a sequence.
///
/// Created by [`SequenceExt::into_iter_seq`](crate::traits::SequenceExt::into_iter_seq).
pub struct SequenceIter<S> {
    seq: S,
}

impl<S> SequenceIter<S> {
    /// Wrap a sequence as an iterator
    pub fn new(seq: S) -> Self {
        Self { seq }
    }

    /// Release the underlying sequence
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for SequenceIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.advance().value()
    }
}

impl<S: Sequence> std::iter::FusedIterator for SequenceIter<S> {}

#[cfg(feature = "stream")]
pub use stream::SequenceStream;

#[cfg(feature = "stream")]
mod stream {
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures_core::Stream;

    use crate::traits::Sequence;

    /// A [`Stream`] that drives a sequence.
    ///
    /// Sequences never wait on anything, so every poll is immediately ready.
    pub struct SequenceStream<S> {
        seq: S,
    }

    impl<S> SequenceStream<S> {
        /// Wrap a sequence as a stream
        pub fn new(seq: S) -> Self {
            Self { seq }
        }
    }

    impl<S: Sequence + Unpin> Stream for SequenceStream<S> {
        type Item = S::Item;

        fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
            Poll::Ready(self.seq.advance().value())
        }
    }
}
