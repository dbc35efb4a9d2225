use reflectionist_core::{Entry, Status};

/// Result of a whole-sequence store operation.
///
/// Failures do not discard the payload: a failed read carries an empty
/// sequence and a failed write carries the sequence it was asked to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreResponse {
    /// Entries read, or entries that were (or failed to be) written. Newest first.
    pub entries: Vec<Entry>,
    /// Outcome of the operation.
    pub status: Status,
}

impl StoreResponse {
    /// Successful response carrying `entries`.
    pub fn success(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            status: Status::Success,
        }
    }

    /// Failed read: empty sequence with `status`.
    pub fn empty(status: Status) -> Self {
        Self {
            entries: Vec::new(),
            status,
        }
    }
}

/// Whole-sequence storage for newest-first entries.
///
/// Implementations never panic or abort on I/O problems; every failure is
/// reported through [`StoreResponse::status`].
pub trait EntryStore {
    /// Reads the full sequence.
    ///
    /// Returns an empty sequence with [`Status::ReadFailure`] when the backing
    /// data cannot be opened, or [`Status::DecodeFailure`] when it does not hold
    /// an array of entry records.
    fn read(&self) -> StoreResponse;

    /// Replaces the stored sequence with `entries`.
    ///
    /// Returns `entries` unchanged with [`Status::WriteFailure`] when the backing
    /// data cannot be written.
    fn write(&self, entries: Vec<Entry>) -> StoreResponse;
}

impl<S: EntryStore + ?Sized> EntryStore for &S {
    fn read(&self) -> StoreResponse {
        (**self).read()
    }

    fn write(&self, entries: Vec<Entry>) -> StoreResponse {
        (**self).write(entries)
    }
}
