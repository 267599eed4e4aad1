//! `Sequence` implementations for the combinators declared in [`crate::traits`].

pub mod combinators;
