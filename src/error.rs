//! The error type shared by both structures.

use thiserror::Error;

/// Everything that can go wrong while building or growing a structure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The global allocator could not provide memory for the named structure.
    #[error("error allocating memory for {0}")]
    Allocation(&'static str),

    /// An argument did not satisfy the operation's precondition.
    #[error("precondition violated: {0}")]
    Precondition(&'static str),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
