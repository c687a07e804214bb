//! Persistence adapter for the task blob: one JSON file holding the ordered
//! array of `{name, start, duration, color}` records.
//!
//! Loading never fails: a missing or unreadable file is an empty plan, a
//! malformed blob is an empty plan, and individually unparsable records are
//! skipped. Loaded values are normalized back into the task invariants.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tempfile::NamedTempFile;

use crate::model::task::{Task, TaskColor};
use crate::ops::plan_ops::normalize_task;

/// Default blob file name, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "tasks.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A persisted record as it appears on disk. Kept separate from `Task` so
/// the loader can tolerate out-of-range numbers and unknown color names
/// from older blobs or hand edits.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    start: i64,
    duration: i64,
    #[serde(default)]
    color: Option<String>,
}

impl RawRecord {
    fn into_task(self) -> Task {
        let mut task = Task {
            name: self.name,
            start: self.start.max(0).min(u32::MAX as i64) as u32,
            duration: self.duration.max(1).min(u32::MAX as i64) as u32,
            color: self
                .color
                .as_deref()
                .and_then(TaskColor::from_name)
                .unwrap_or_default(),
        };
        normalize_task(&mut task);
        task
    }
}

/// Handle on the blob's location.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list. Never raises; the fallback is an empty list.
    pub fn load(&self) -> Vec<Task> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };
        let records: Vec<serde_json::Value> = match serde_json::from_str(&content) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };
        records
            .into_iter()
            .filter_map(|value| serde_json::from_value::<RawRecord>(value).ok())
            .map(RawRecord::into_task)
            .collect()
    }

    /// Write the task list back to the blob, via temp file + rename so a
    /// crash mid-write cannot truncate the previous state.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(tasks)?;
        let dir = self.path.parent().unwrap_or(Path::new("."));
        let write = |mut tmp: NamedTempFile| -> std::io::Result<()> {
            tmp.write_all(content.as_bytes())?;
            tmp.flush()?;
            tmp.persist(&self.path).map_err(|e| e.error)?;
            Ok(())
        };
        NamedTempFile::new_in(dir)
            .and_then(write)
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
