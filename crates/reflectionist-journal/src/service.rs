//! Journal service implementation.

use crate::errors::JournalError;
use reflectionist_core::{Entry, Status};
use reflectionist_store::{EntryStore, JsonFileStore};
use std::path::Path;
use tracing::{debug, warn};

/// Result of [`Journal::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// The entry that was built. It is persisted only when `status` is [`Status::Success`].
    pub entry: Entry,
    /// [`Status::ReadFailure`] when the store could not be read (nothing was
    /// written); otherwise the status of the write.
    pub status: Status,
}

/// Newest-first reflection journal over an [`EntryStore`].
///
/// # Example
///
/// ```rust
/// use reflectionist_journal::{Journal, Status};
/// use reflectionist_store::MemoryStore;
///
/// let journal = Journal::new(MemoryStore::new());
/// journal.add("first", "felt", "learned");
/// journal.add("second", "felt", "learned");
///
/// let entries = journal.list();
/// assert_eq!(entries[0].happened, "second");
/// assert_eq!(entries[1].happened, "first");
/// ```
#[derive(Debug)]
pub struct Journal<S = JsonFileStore> {
    store: S,
}

impl Journal<JsonFileStore> {
    /// Opens a journal over the JSON store file at `path`.
    ///
    /// The file is expected to exist already; see [`reflectionist_store::init`].
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::new(JsonFileStore::open(path))
    }
}

impl<S: EntryStore> Journal<S> {
    /// Creates a journal over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records a new entry stamped with the current UTC time at position 0.
    ///
    /// If the store cannot be read, the built entry is returned with
    /// [`Status::ReadFailure`] and nothing is written. A store whose content
    /// cannot be decoded is treated as empty: its content is replaced by a
    /// sequence holding only the new entry.
    pub fn add(
        &self,
        happened: impl Into<String>,
        felt: impl Into<String>,
        learned: impl Into<String>,
    ) -> AddOutcome {
        let entry = Entry::new(happened, felt, learned);

        let read = self.store.read();
        match read.status {
            Status::ReadFailure => {
                warn!(status = ?read.status, "not adding reflection: store unreadable");
                return AddOutcome {
                    entry,
                    status: read.status,
                };
            }
            Status::DecodeFailure => {
                warn!("store content is not a list of reflections; replacing it");
            }
            _ => {}
        }

        let mut entries = read.entries;
        entries.insert(0, entry.clone());
        let written = self.store.write(entries);
        if written.status.is_success() {
            debug!(entries = written.entries.len(), "added reflection");
        } else {
            warn!(status = ?written.status, "failed to persist reflection");
        }

        AddOutcome {
            entry,
            status: written.status,
        }
    }

    /// All entries, newest first.
    ///
    /// The store's status is discarded: an unreadable or corrupt store yields an
    /// empty sequence. Use [`Journal::entries`] to observe failures.
    pub fn list(&self) -> Vec<Entry> {
        self.store.read().entries
    }

    /// All entries, newest first, failing when the store cannot be read or decoded.
    pub fn entries(&self) -> Result<Vec<Entry>, JournalError> {
        let read = self.store.read();
        if !read.status.is_success() {
            return Err(JournalError::Read {
                status: read.status,
            });
        }
        Ok(read.entries)
    }

    /// Entry at position `id` of the current newest-first sequence.
    ///
    /// # Errors
    ///
    /// - [`JournalError::Read`] if the store reports anything but [`Status::Success`]
    /// - [`JournalError::OutOfRange`] if `id < 0` or `id >= len`
    pub fn describe(&self, id: i64) -> Result<Entry, JournalError> {
        let mut entries = self.entries()?;
        let len = entries.len();
        match usize::try_from(id) {
            Ok(index) if index < len => Ok(entries.swap_remove(index)),
            _ => Err(JournalError::OutOfRange { id, len }),
        }
    }
}
