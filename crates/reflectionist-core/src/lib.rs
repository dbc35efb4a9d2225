//! Core record types for Reflectionist journals.
//!
//! This crate provides:
//! - The [`Entry`] record persisted by every store backend
//! - The creation timestamp format stamped onto new entries
//! - The [`Status`] vocabulary shared by the store, the journal service and the CLI
//!
//! Core invariants:
//! - Entries are immutable once created; `created_at` is assigned exactly once
//! - Entries carry no stored identifier; their id is their position in the
//!   newest-first sequence they were loaded from
//!
#![deny(missing_docs)]

/// Reflection entry record.
pub mod entry;
/// Outcome codes for store and journal operations.
pub mod status;

pub use entry::{Entry, TIMESTAMP_FORMAT};
pub use status::Status;
