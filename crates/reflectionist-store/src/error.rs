//! Error types for store operations.

use reflectionist_core::Status;
use thiserror::Error;

/// Errors raised inside a store backend before they are folded into a [`Status`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error while opening, reading or writing the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Content is not a JSON array of entry records, or could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Status reported when this error occurs while reading.
    pub fn read_status(&self) -> Status {
        match self {
            StoreError::Io(_) => Status::ReadFailure,
            StoreError::Json(_) => Status::DecodeFailure,
        }
    }
}
