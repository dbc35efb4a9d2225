//! List command implementation.

use super::open_journal;
use crate::output;
use std::path::Path;

pub fn run(config_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let journal = open_journal(config_path)?;
    let entries = journal
        .entries()
        .map_err(|e| format!("Listing reflections failed with \"{}\"", e.status()))?;

    if json {
        println!("{}", output::format_json_list(&entries));
        return Ok(());
    }

    if entries.is_empty() {
        println!("There are no reflections yet");
        return Ok(());
    }

    println!("{}", output::format_list_header(entries.len()));
    for (id, entry) in entries.iter().enumerate() {
        println!("{}", output::format_list_row(id, entry));
    }

    Ok(())
}
