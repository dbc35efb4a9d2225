//! Init command implementation.

use crate::config::{self, Config};
use reflectionist_store::Status;
use std::path::{Path, PathBuf};

pub fn run(config_path: &Path, db_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = db_path
        .or_else(config::default_database_path)
        .ok_or("could not determine a database path; pass --db-path")?;

    Config::new(&db_path)
        .save(config_path)
        .map_err(|e| format!("Creating config file failed with \"{}\"", e))?;

    let status = reflectionist_store::init(&db_path);
    if status != Status::Success {
        return Err(format!("Creating database failed with \"{}\"", status).into());
    }

    println!("The reflections database is {}", db_path.display());
    Ok(())
}
