//! Storage backends for Reflectionist entries.
//!
//! This crate provides:
//! - The [`EntryStore`] trait: whole-sequence read and write with status reporting
//! - [`JsonFileStore`], the reference backend over a single JSON-array file
//! - [`MemoryStore`], an in-process backend with injectable failures
//! - [`init`] for creating an empty store file
//!
//! The file backend never appends: every write serializes the full sequence and
//! overwrites the file. A crash mid-write can truncate the file.

#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// JSON-array file backend.
pub mod json;
/// In-memory backend.
pub mod memory;
/// Storage backend trait.
pub mod traits;

pub use error::StoreError;
pub use json::{init, JsonFileStore};
pub use memory::MemoryStore;
pub use reflectionist_core::{Entry, Status};
pub use traits::{EntryStore, StoreResponse};
