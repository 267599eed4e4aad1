//! # Lazy, pull-based sequence combinators
//!
//! This crate provides composable primitives that transform, filter and
//! aggregate possibly-infinite sequences of values without materializing
//! them in memory.
//!
//! ## Core Concepts
//!
//! - **Sequence**: A stateful cursor that produces one value per `advance`
//! - **Source**: A sequence with no upstream (ranges, counters, collections)
//! - **Combinator**: A sequence that owns and transforms an upstream sequence
//! - **Sink**: An eager terminal that drains a sequence into one value
//! - **Pipeline**: A fluent wrapper that chains combinators left to right
//!
//! ## Example
//!
//! ```rust
//! use seqweld::prelude::*;
//!
//! let total = wrap(naturals())
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * n)
//!     .take(4)
//!     .sum();
//!
//! assert_eq!(total, 0 + 4 + 16 + 36);
//! ```
//!
//! Nothing is evaluated until a terminal pulls on the pipeline, so the
//! unbounded `naturals()` above is only advanced seven times.

// Logging macros; they compile to nothing without the `tracing` feature.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod error;
pub mod impls;
pub mod pipeline;
pub mod processors;
pub mod sinks;
pub mod sources;
pub mod traits;
pub mod util;

#[cfg(feature = "tracing")]
pub mod tracing_support;

// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pipeline::{wrap, Pipeline};
    pub use crate::sinks::collectors::{self, Collector};
    pub use crate::sources::{
        from_collection, from_iter, naturals, range, range_from, CollectionSource, IterSource,
        Naturals, RangeSource,
    };
    pub use crate::traits::{BoxSequence, Peek, Sequence, SequenceExt, Step};

    #[cfg(feature = "tracing")]
    pub use crate::tracing_support::TracedExt;
}

// Re-export main error type
pub use error::{Error, Result};
pub use sinks::collectors;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
