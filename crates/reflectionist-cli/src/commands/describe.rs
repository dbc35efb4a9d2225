//! Describe command implementation.

use super::open_journal;
use crate::output;
use std::path::Path;

pub fn run(config_path: &Path, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let journal = open_journal(config_path)?;
    let entry = journal
        .describe(id)
        .map_err(|e| format!("Describing a reflection failed with \"{}\": {}", e.status(), e))?;

    println!("{}", output::format_json(&entry));
    Ok(())
}
