//! Durable key/value storage behind the session store

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::error::{Result, SessionError};

/// String-keyed entries as persisted on disk
pub type Entries = BTreeMap<String, String>;

/// Storage backend for session entries.
///
/// `apply` commits a whole batch of changes at once: readers observe either
/// none of the batch or all of it.
pub trait SessionStorage: Send + Sync {
    /// Read every entry
    fn load(&self) -> Result<Entries>;

    /// Set (`Some`) or remove (`None`) several entries in one commit
    fn apply(&self, changes: &[(&str, Option<String>)]) -> Result<()>;
}

fn merge(entries: &mut Entries, changes: &[(&str, Option<String>)]) {
    for (key, value) in changes {
        match value {
            Some(v) => {
                entries.insert((*key).to_string(), v.clone());
            }
            None => {
                entries.remove(*key);
            }
        }
    }
}

/// JSON-object file storage, e.g. `~/.slotctl/session.json`.
///
/// Every read goes to disk, so writes from other processes show up on the
/// next read. Concurrent writers across processes are last-writer-wins.
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn write_atomic(&self, entries: &Entries) -> Result<()> {
        let write_err = |e: std::io::Error| SessionError::Write(e.to_string());

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(write_err)?;

        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| SessionError::Write(e.to_string()))?;

        // Uniquely named and created owner-only (0600 on Unix)
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(contents.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;

        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| SessionError::Read(e.to_string()))?;

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        let entries = serde_json::from_str(&contents).map_err(|e| {
            SessionError::Read(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(entries)
    }

    fn apply(&self, changes: &[(&str, Option<String>)]) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut entries = self.load().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable session storage: {}", e);
            Entries::new()
        });
        merge(&mut entries, changes);

        self.write_atomic(&entries)
    }
}

/// Process-local storage for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<Entries>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with raw entries
    pub fn with_entries(entries: Entries) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Entries> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.clone())
    }

    fn apply(&self, changes: &[(&str, Option<String>)]) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        merge(&mut entries, changes);
        Ok(())
    }
}
