//! In-memory store backend.

use crate::traits::{EntryStore, StoreResponse};
use reflectionist_core::{Entry, Status};
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone)]
enum Contents {
    Missing,
    Corrupt,
    Entries(Vec<Entry>),
}

/// Store holding its sequence in process memory.
///
/// Mirrors the observable behavior of [`JsonFileStore`](crate::JsonFileStore),
/// including its failure modes: the store can start out missing (reads report
/// [`Status::ReadFailure`]) or corrupt ([`Status::DecodeFailure`]), and writes
/// can be made to fail with [`Status::WriteFailure`]. A successful write
/// replaces whatever the store held before, corrupt contents included.
#[derive(Debug)]
pub struct MemoryStore {
    contents: RefCell<Contents>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    /// Creates a store holding `entries` (newest first).
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self::from_contents(Contents::Entries(entries))
    }

    /// Creates a store whose reads fail with [`Status::ReadFailure`] until written.
    pub fn missing() -> Self {
        Self::from_contents(Contents::Missing)
    }

    /// Creates a store whose reads fail with [`Status::DecodeFailure`] until written.
    pub fn corrupt() -> Self {
        Self::from_contents(Contents::Corrupt)
    }

    fn from_contents(contents: Contents) -> Self {
        Self {
            contents: RefCell::new(contents),
            fail_writes: Cell::new(false),
            writes: Cell::new(0),
        }
    }

    /// Makes subsequent writes fail (`true`) or succeed (`false`).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Currently stored entries, or `None` while missing or corrupt.
    pub fn snapshot(&self) -> Option<Vec<Entry>> {
        match &*self.contents.borrow() {
            Contents::Entries(entries) => Some(entries.clone()),
            Contents::Missing | Contents::Corrupt => None,
        }
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore for MemoryStore {
    fn read(&self) -> StoreResponse {
        match &*self.contents.borrow() {
            Contents::Missing => StoreResponse::empty(Status::ReadFailure),
            Contents::Corrupt => StoreResponse::empty(Status::DecodeFailure),
            Contents::Entries(entries) => StoreResponse::success(entries.clone()),
        }
    }

    fn write(&self, entries: Vec<Entry>) -> StoreResponse {
        if self.fail_writes.get() {
            return StoreResponse {
                entries,
                status: Status::WriteFailure,
            };
        }
        *self.contents.borrow_mut() = Contents::Entries(entries.clone());
        self.writes.set(self.writes.get() + 1);
        StoreResponse::success(entries)
    }
}
