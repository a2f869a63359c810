//! Durable, append-only storage for task records.
//!
//! The collection lives in a single JSON file holding an array of `Task`.
//! Appends are a read-modify-write under an advisory file lock. The new
//! array is written to a sibling temp file and renamed over the original, so
//! a crash mid-write leaves either the old or the new collection on disk.

use std::fs::{self, File, OpenOptions, TryLockError};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::task::Task;

/// Default location of the collection, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "db/tasks.json";

/// Handle on the on-disk task collection.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored task in file order.
    ///
    /// A missing or empty file is an empty collection.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// Append one task to the end of the collection.
    ///
    /// On success the file holds the previous array plus `task` as its last
    /// element. On error the previous file contents are left in place.
    pub fn append(&self, task: Task) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }

        let _lock = lock(&self.path)?;

        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.push(task);
        self.save(&tasks)?;

        info!(path = %self.path.display(), count = before + 1, "appended task");
        Ok(())
    }

    /// Write the full collection using temp file + rename.
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(tasks).map_err(StoreError::Encode)?;
        let tmp = sibling(&self.path, "tmp");

        let write = || -> std::io::Result<()> {
            let mut f = File::create(&tmp)?;
            f.write_all(data.as_bytes())?;
            f.flush()?;
            f.sync_all()
        };
        if let Err(e) = write() {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::io(&tmp, e));
        }

        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StoreError::io(&self.path, e)
        })?;
        debug!(path = %self.path.display(), bytes = data.len(), "rewrote task list");
        Ok(())
    }
}

/// Take the advisory lock on `<path>.lock` for the whole read-modify-write.
///
/// The lock lives on the open handle, so the OS releases it when the holder
/// exits or crashes. The file itself is left in place.
fn lock(target: &Path) -> Result<File, StoreError> {
    let path = sibling(target, "lock");
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)
        .map_err(|e| StoreError::io(&path, e))?;
    match file.try_lock() {
        Ok(()) => Ok(file),
        Err(TryLockError::WouldBlock) => {
            warn!(lock = %path.display(), "task list is locked by another writer");
            Err(StoreError::Locked { path })
        }
        Err(TryLockError::Error(e)) => Err(StoreError::io(path, e)),
    }
}

// `tasks.json` -> `tasks.json.<suffix>`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}
