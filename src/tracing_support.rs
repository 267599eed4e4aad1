//! `tracing` instrumentation for sequences.
//!
//! Only compiled with the `tracing` feature.

use std::borrow::Cow;

use crate::traits::{Sequence, Step};

/// A sequence that logs every advance of the sequence it wraps.
///
/// Each value is reported at `TRACE` with its position; exhaustion is
/// reported once at `DEBUG`.
pub struct Traced<S> {
    seq: S,
    label: Cow<'static, str>,
    produced: usize,
    reported_done: bool,
}

impl<S> Traced<S> {
    /// Wrap a sequence under the given label
    pub fn new(seq: S, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            seq,
            label: label.into(),
            produced: 0,
            reported_done: false,
        }
    }

    /// How many values have passed through so far
    pub fn produced(&self) -> usize {
        self.produced
    }
}

impl<S: Sequence> Sequence for Traced<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        let next = self.seq.advance();
        match &next {
            Step::Value(_) => {
                tracing::trace!(label = %self.label, index = self.produced, "sequence advanced");
                self.produced += 1;
            }
            Step::Done if !self.reported_done => {
                tracing::debug!(label = %self.label, produced = self.produced, "sequence exhausted");
                self.reported_done = true;
            }
            Step::Done => {}
        }
        next
    }
}

/// Extension trait that adds [`traced`](TracedExt::traced) to every sequence
pub trait TracedExt: Sequence + Sized {
    /// Log each advance of this sequence under `label`
    fn traced(self, label: impl Into<Cow<'static, str>>) -> Traced<Self> {
        Traced::new(self, label)
    }
}

impl<S: Sequence> TracedExt for S {}
