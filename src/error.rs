//! Error types for the sequence container.

use thiserror::Error;

/// Result type alias for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Errors that can occur when operating on a [`Sequence`](crate::Sequence).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// Position is out of the valid range for the requested operation.
    #[error("Position {position} out of bounds for sequence of length {length}")]
    IndexOutOfBounds { position: usize, length: usize },

    /// `front`, `back`, or `pop_back` called on an empty sequence.
    #[error("Sequence is empty")]
    EmptyContainer,
}

impl SequenceError {
    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(position: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { position, length }
    }

    /// Creates an EmptyContainer error.
    pub fn empty_container() -> Self {
        Self::EmptyContainer
    }
}
