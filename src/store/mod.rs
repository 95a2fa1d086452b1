//! File-backed persistence for item completion flags.
//!
//! The whole store is one JSON file containing a flat `{ id: bool }` object,
//! pretty-printed. Every write is a full read-modify-write cycle under a
//! single lock, so concurrent writers on different keys cannot lose each
//! other's updates. Reads are fail-open: a missing or unparsable file is
//! treated as "nothing completed yet" rather than an error, so the page never
//! hard-fails on a broken status file.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::models::StatusMap;

/// File name of the backing store under the data directory.
const DATA_FILE: &str = "roadmap-status.json";

pub struct StatusStore {
    path: PathBuf,
    /// Serializes every read-modify-write cycle across cloned handles.
    lock: Arc<Mutex<()>>,
}

impl StatusStore {
    /// Open a store at an explicit path. No I/O happens until the first
    /// write; the file and its directory are created on demand.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "goji")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(Self::open(dirs.data_dir().join(DATA_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full status map. Never fails: a missing file reads as an empty
    /// map, and a corrupt file is logged and likewise treated as empty.
    pub fn get_all(&self) -> StatusMap {
        let _guard = self.lock.lock().expect("status store lock poisoned");
        self.read_map()
    }

    /// Merge a single entry into the persisted map and rewrite the file.
    /// Returns the resulting full map.
    pub fn set(&self, id: &str, completed: bool) -> Result<StatusMap> {
        let _guard = self.lock.lock().expect("status store lock poisoned");
        let mut map = self.read_map();
        map.insert(id.to_string(), completed);
        self.write_map(&map)?;
        Ok(map)
    }

    /// Merge many entries in one read-modify-write cycle. Entries for keys
    /// already present overwrite; keys absent from `entries` are untouched.
    pub fn set_bulk(&self, entries: impl IntoIterator<Item = (String, bool)>) -> Result<StatusMap> {
        let _guard = self.lock.lock().expect("status store lock poisoned");
        let mut map = self.read_map();
        for (id, completed) in entries {
            map.insert(id, completed);
        }
        self.write_map(&map)?;
        Ok(map)
    }

    fn read_map(&self) -> StatusMap {
        let Ok(data) = std::fs::read_to_string(&self.path) else {
            return StatusMap::new();
        };
        match serde_json::from_str(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(
                    "Unparsable status file {}, treating as empty: {}",
                    self.path.display(),
                    e
                );
                StatusMap::new()
            }
        }
    }

    fn write_map(&self, map: &StatusMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }
}

impl Clone for StatusStore {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            lock: self.lock.clone(),
        }
    }
}
