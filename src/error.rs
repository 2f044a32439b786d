use thiserror::Error;

/// Error types for `Sequence` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SequenceError {
    /// Position lies outside the range the operation accepts
    #[error("Cannot {operation}: position {position} is out of range for length {length}")]
    PositionOutOfRange {
        /// Name of the rejected operation
        operation: &'static str,
        /// Position that was requested
        position: usize,
        /// Current length of the sequence
        length: usize,
    },
    /// Operation needs at least one element
    #[error("Cannot {operation}: the sequence is empty")]
    EmptySequence {
        /// Name of the rejected operation
        operation: &'static str,
    },
    /// Batch insert was given no elements
    #[error("Cannot insert values: the batch must contain at least one element")]
    EmptyBatch,
    /// Range bounds are not ordered as `begin < end`
    #[error("Cannot erase elements: range {begin}..{end} is empty or reversed")]
    InvalidRange {
        /// First position of the range
        begin: usize,
        /// One-past-last position of the range
        end: usize,
    },
    /// Cursor does not reference a live element
    #[error("Cursor at position {position} does not reference a live element")]
    InvalidCursor {
        /// Position the cursor was at
        position: usize,
    },
    /// Requested capacity cannot be allocated for `f64` elements
    #[error("Capacity overflow: requested {requested} elements, but at most {max} can be allocated")]
    CapacityOverflow {
        /// Number of element slots requested
        requested: usize,
        /// Largest capacity the buffer may have
        max: usize,
    },
    /// Allocator could not provide a buffer of the requested size
    #[error("Allocation failed: could not allocate {requested} elements")]
    AllocationFailed {
        /// Number of element slots requested
        requested: usize,
    },
}

/// Broad classification of a [`SequenceError`]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// The caller passed an argument the operation does not accept
    InvalidArgument,
    /// The buffer would exceed the addressable size or available memory
    CapacityOverflow,
}

impl SequenceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SequenceError::CapacityOverflow { .. } | SequenceError::AllocationFailed { .. } => {
                ErrorKind::CapacityOverflow
            }
            _ => ErrorKind::InvalidArgument,
        }
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
