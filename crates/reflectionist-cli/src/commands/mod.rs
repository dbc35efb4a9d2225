//! Command implementations.

pub mod create;
pub mod describe;
pub mod init;
pub mod list;

use crate::config::Config;
use reflectionist_journal::Journal;
use std::path::Path;

/// Opens the journal named by the config file at `config_path`.
///
/// Fails with a hint to run `reflectionist init` when either the config file or
/// the database it names does not exist.
pub fn open_journal(config_path: &Path) -> Result<Journal, Box<dyn std::error::Error>> {
    if !config_path.exists() {
        return Err(r#"Config file not found. Please, run "reflectionist init""#.into());
    }
    let config = Config::load(config_path)
        .map_err(|e| format!("Failed to read config file {}: {}", config_path.display(), e))?;
    let db_path = config.database_path()?;
    if !db_path.exists() {
        return Err(r#"Database not found. Please, run "reflectionist init""#.into());
    }
    tracing::debug!(config = %config_path.display(), database = %db_path.display(), "opening journal");
    Ok(Journal::open(db_path))
}
