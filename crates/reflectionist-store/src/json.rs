//! JSON-array file backend.

use crate::error::StoreError;
use crate::traits::{EntryStore, StoreResponse};
use reflectionist_core::{Entry, Status};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const INDENT: &[u8] = b"    ";
const EMPTY_ARRAY: &str = "[]";

/// Store backed by a single UTF-8 file holding a JSON array of entries.
///
/// The file is the unit of every operation: [`read`](EntryStore::read) parses
/// the whole array and [`write`](EntryStore::write) overwrites it. Nothing is
/// cached between calls, so external edits are picked up on the next read.
///
/// # Example
///
/// ```rust
/// use reflectionist_store::{init, Entry, EntryStore, JsonFileStore, Status};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("reflections.json");
/// assert_eq!(init(&path), Status::Success);
///
/// let store = JsonFileStore::open(&path);
/// let written = store.write(vec![Entry::new("happened", "felt", "learned")]);
/// assert_eq!(written.status, Status::Success);
/// assert_eq!(store.read().entries, written.entries);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over `path`. The file is not touched until the first operation.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file with an empty array. See [`init`].
    pub fn init(&self) -> Status {
        init(&self.path)
    }

    fn load(&self) -> Result<Vec<Entry>, StoreError> {
        let bytes = fs::read(&self.path)?;
        let entries = serde_json::from_slice(&bytes)?;
        Ok(entries)
    }

    fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut serializer =
            Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        entries.serialize(&mut serializer)?;
        writer.flush()?;
        Ok(())
    }
}

impl EntryStore for JsonFileStore {
    fn read(&self) -> StoreResponse {
        match self.load() {
            Ok(entries) => {
                debug!(path = %self.path.display(), entries = entries.len(), "read store");
                StoreResponse::success(entries)
            }
            Err(error) => {
                let status = error.read_status();
                warn!(path = %self.path.display(), %error, ?status, "failed to read store");
                StoreResponse::empty(status)
            }
        }
    }

    fn write(&self, entries: Vec<Entry>) -> StoreResponse {
        match self.save(&entries) {
            Ok(()) => {
                debug!(path = %self.path.display(), entries = entries.len(), "wrote store");
                StoreResponse::success(entries)
            }
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to write store");
                StoreResponse {
                    entries,
                    status: Status::WriteFailure,
                }
            }
        }
    }
}

/// Creates a store file holding an empty JSON array.
///
/// Missing parent directories are created. A file that already holds data
/// (any non-whitespace byte) is left untouched and reported as
/// [`Status::Success`]; an absent, empty or whitespace-only file is written
/// with `[]`.
///
/// Returns [`Status::WriteFailure`] when the file cannot be created.
pub fn init<P: AsRef<Path>>(path: P) -> Status {
    let path = path.as_ref();
    match try_init(path) {
        Ok(true) => {
            debug!(path = %path.display(), "initialized empty store");
            Status::Success
        }
        Ok(false) => {
            debug!(path = %path.display(), "store already holds data");
            Status::Success
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "failed to initialize store");
            Status::WriteFailure
        }
    }
}

/// Returns `Ok(true)` when the file was (re)written, `Ok(false)` when it already held data.
fn try_init(path: &Path) -> Result<bool, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    match fs::read(path) {
        Ok(bytes) if bytes.iter().any(|b| !b.is_ascii_whitespace()) => return Ok(false),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    fs::write(path, EMPTY_ARRAY)?;
    Ok(true)
}
