//! Reflection journal service.
//!
//! This crate provides [`Journal`], the only layer that gives entries meaning on
//! top of an [`EntryStore`](reflectionist_store::EntryStore):
//! - new entries are stamped with the current UTC time
//! - new entries are inserted at position 0, so the sequence is newest first
//! - entries are addressed by their position in that sequence
//!
//! Positions are not stable: every `add` shifts existing entries by one.
//!
//! ## Quick Start
//!
//! ```rust
//! use reflectionist_journal::{Journal, Status};
//! use reflectionist_store::init;
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("reflections.json");
//! assert_eq!(init(&path), Status::Success);
//!
//! let journal = Journal::open(&path);
//! let added = journal.add("I was a dog", "I was a cat", "I was a mouse");
//! assert_eq!(added.status, Status::Success);
//!
//! let newest = journal.describe(0)?;
//! assert_eq!(newest, added.entry);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Every operation is a single read (or read-modify-write) of the whole store.
//! Nothing guards against another process writing between the read and the
//! write of an `add`; the later write wins.

#![deny(missing_docs)]

/// Error types for journal operations.
pub mod errors;
/// Journal service implementation.
pub mod service;

pub use errors::JournalError;
pub use reflectionist_core::{Entry, Status};
pub use service::{AddOutcome, Journal};
