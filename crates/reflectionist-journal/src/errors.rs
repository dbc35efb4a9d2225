use reflectionist_core::Status;
use thiserror::Error;

/// Errors returned by journal operations that have no status in their return value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    /// The store could not be read; `status` is the store's report.
    #[error("could not read reflections: {status}")]
    Read {
        /// Status reported by the store (never [`Status::Success`]).
        status: Status,
    },
    /// No entry exists at the requested position.
    #[error("reflection with id {id} does not exist ({len} reflections)")]
    OutOfRange {
        /// Requested position.
        id: i64,
        /// Number of entries at the time of the request.
        len: usize,
    },
}

impl JournalError {
    /// Maps the error onto the shared status vocabulary.
    pub fn status(&self) -> Status {
        match self {
            JournalError::Read { status } => *status,
            JournalError::OutOfRange { .. } => Status::OutOfRange,
        }
    }
}
