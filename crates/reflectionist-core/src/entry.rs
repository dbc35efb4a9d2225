use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// `strftime` format of [`Entry::created_at`] (UTC, microsecond precision).
///
/// Example: `2024-01-01 12:00:00.000000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One journaled reflection.
///
/// Field declaration order is the serialized key order:
/// `created_at`, `happened`, `felt`, `learned`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// When the entry was created, formatted with [`TIMESTAMP_FORMAT`].
    pub created_at: String,
    /// What happened that affected me.
    pub happened: String,
    /// How I felt then and now.
    pub felt: String,
    /// What I learned about myself.
    pub learned: String,
}

impl Entry {
    /// Creates an entry stamped with the current UTC time.
    pub fn new(
        happened: impl Into<String>,
        felt: impl Into<String>,
        learned: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(Utc::now(), happened, felt, learned)
    }

    /// Creates an entry stamped with `created_at`.
    pub fn with_timestamp(
        created_at: DateTime<Utc>,
        happened: impl Into<String>,
        felt: impl Into<String>,
        learned: impl Into<String>,
    ) -> Self {
        Self {
            created_at: created_at.format(TIMESTAMP_FORMAT).to_string(),
            happened: happened.into(),
            felt: felt.into(),
            learned: learned.into(),
        }
    }

    /// Parses `created_at` back into a UTC timestamp.
    ///
    /// Returns `None` when the stored string does not follow [`TIMESTAMP_FORMAT`]
    /// (for example, a store edited by hand). The stored string is never rewritten.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.created_at, TIMESTAMP_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}
