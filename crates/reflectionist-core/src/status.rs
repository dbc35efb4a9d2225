use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a store or journal operation.
///
/// Store operations report failures as a `Status` alongside their data rather
/// than aborting; the journal service forwards them unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Operation completed.
    Success,
    /// Backing file missing or unreadable.
    ReadFailure,
    /// Backing file not writable or not creatable.
    WriteFailure,
    /// Backing file content is not a JSON array of entries.
    DecodeFailure,
    /// Requested position is outside the current sequence.
    OutOfRange,
}

impl Status {
    /// Stable numeric code.
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::ReadFailure => 1,
            Status::WriteFailure => 2,
            Status::DecodeFailure => 3,
            Status::OutOfRange => 4,
        }
    }

    /// Human-readable message, as shown by the CLI.
    pub fn message(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::ReadFailure => "database read error",
            Status::WriteFailure => "database write error",
            Status::DecodeFailure => "json error",
            Status::OutOfRange => "id error",
        }
    }

    /// Returns `true` for [`Status::Success`].
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
