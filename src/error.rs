//! Error types for the sequence combinators.
//!
//! Almost nothing in this crate can fail: combinators and most terminals are
//! total. The one recoverable failure is asking for an element past the end
//! of a sequence.

use thiserror::Error;

/// The main error type for sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `nth` ran out of elements before reaching the requested index
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// The zero-based index that was requested
        index: usize,
        /// How many elements the sequence produced before exhausting
        len: usize,
    },
}

// Convenience constructors
impl Error {
    /// Create an index-out-of-range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, Error>;
