use std::fmt;

pub type Result<T, E = CollectionError> = std::result::Result<T, E>;

/// Error returned by the operations of a bounded slot collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// An argument can never be accepted, whatever the state of the collection.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// The collection is in a state that does not allow the operation.
    #[error(transparent)]
    InvalidState(#[from] InvalidState),

    /// An external index is outside `[0, count)`.
    #[error("index {index} is out of range for a collection of {count} items")]
    OutOfRange {
        /// The rejected external index.
        index: usize,
        /// Number of occupied slots at the time of the call.
        count: usize,
    },

    /// The operation exists on the API surface but is deliberately not implemented.
    #[error("{operation} is not supported")]
    NotSupported {
        /// The refused operation.
        operation: Operation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    /// `None` was passed where an item is required.
    #[error("item cannot be empty: a bounded slot collection never stores the empty sentinel")]
    EmptyItem,

    #[error("capacity must be > 0")]
    ZeroCapacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidState {
    /// Every slot is occupied and the overflow policy refuses to overwrite.
    #[error("collection is full ({capacity} items), no more items can be added")]
    Full { capacity: usize },
}

/// Operations that can be refused with [`CollectionError::NotSupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    InsertAt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::InsertAt => write!(f, "positional insertion"),
        }
    }
}

/// Flat classification of [`CollectionError`], convenient for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
    OutOfRange,
    NotSupported,
}

impl CollectionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollectionError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CollectionError::InvalidState(_) => ErrorKind::InvalidState,
            CollectionError::OutOfRange { .. } => ErrorKind::OutOfRange,
            CollectionError::NotSupported { .. } => ErrorKind::NotSupported,
        }
    }
}
