//! Implementations of the combinators defined in the traits module.

use crate::traits::{
    Enumerate, Filter, Fuse, Inspect, Map, Peek, Peekable, Sequence, Skip, Step, Take, Zip,
};

// Map combinator implementation
impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Step<Self::Item> {
        match self.seq.advance() {
            Step::Value(item) => Step::Value((self.f)(item)),
            Step::Done => Step::Done,
        }
    }
}

// Filter combinator implementation
impl<S, F> Sequence for Filter<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        // A loop rather than a recursive retry, so long rejection runs
        // cannot grow the stack.
        loop {
            match self.seq.advance() {
                Step::Value(item) => {
                    if (self.predicate)(&item) {
                        return Step::Value(item);
                    }
                }
                Step::Done => return Step::Done,
            }
        }
    }
}

// Take combinator implementation
impl<S> Sequence for Take<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        if self.remaining == 0 {
            return Step::Done;
        }

        match self.seq.advance() {
            Step::Value(item) => {
                self.remaining -= 1;
                Step::Value(item)
            }
            Step::Done => {
                self.remaining = 0;
                Step::Done
            }
        }
    }
}

// Drop combinator implementation
impl<S> Sequence for Skip<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if self.seq.advance().is_done() {
                self.remaining = 0;
                return Step::Done;
            }
        }
        self.seq.advance()
    }
}

// Enumerate combinator implementation
impl<S> Sequence for Enumerate<S>
where
    S: Sequence,
{
    type Item = (usize, S::Item);

    fn advance(&mut self) -> Step<Self::Item> {
        match self.seq.advance() {
            Step::Value(item) => {
                let index = self.index;
                self.index += 1;
                Step::Value((index, item))
            }
            Step::Done => Step::Done,
        }
    }
}

// Zip combinator implementation
impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);

    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Done;
        }

        // Both sides advance once per call; whatever is left on the longer
        // side once the other runs out is never drained.
        match (self.a.advance(), self.b.advance()) {
            (Step::Value(a), Step::Value(b)) => Step::Value((a, b)),
            _ => {
                self.done = true;
                Step::Done
            }
        }
    }
}

impl<S: Sequence> Peekable<S> {
    /// Wrap a sequence, eagerly pulling its first value into the buffer.
    pub fn new(mut seq: S) -> Self {
        let peeked = seq.advance();
        Self { seq, peeked }
    }

    /// Returns `true` if the next advance will return `Done`.
    pub fn is_exhausted(&self) -> bool {
        self.peeked.is_done()
    }
}

// Peekable combinator implementation
impl<S> Sequence for Peekable<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        if self.peeked.is_done() {
            return Step::Done;
        }
        let refill = self.seq.advance();
        std::mem::replace(&mut self.peeked, refill)
    }
}

impl<S> Peek for Peekable<S>
where
    S: Sequence,
{
    fn peek(&self) -> Option<&Self::Item> {
        match &self.peeked {
            Step::Value(item) => Some(item),
            Step::Done => None,
        }
    }
}

// Fuse combinator implementation
impl<S> Sequence for Fuse<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Done;
        }
        let next = self.seq.advance();
        self.done = next.is_done();
        next
    }
}

// Inspect combinator implementation
impl<S, F> Sequence for Inspect<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        let next = self.seq.advance();
        if let Step::Value(item) = &next {
            (self.f)(item);
        }
        next
    }
}
