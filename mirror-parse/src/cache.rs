//! Per-run source file cache.
//!
//! One `ParseCache` is constructed per pipeline run, shared across the
//! concurrently processed groups, and dropped when the run ends. Entries are
//! derived deterministically from immutable file content, so concurrent lazy
//! population is race-safe: whichever task loads a path first wins, and any
//! later load observes the same content.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{Error, Result};

/// Read-through cache of source file contents, keyed by path.
#[derive(Debug, Default)]
pub struct ParseCache {
    files: Mutex<HashMap<PathBuf, Arc<str>>>,
}

impl ParseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a source file, reading it at most once per run.
    pub fn load(&self, path: &Path) -> Result<Arc<str>> {
        if let Some(content) = self.lookup(path) {
            return Ok(content);
        }

        // Read outside the lock; a concurrent load of the same path does
        // redundant I/O at worst, and both insert identical content.
        let content: Arc<str> = std::fs::read_to_string(path)
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?
            .into();

        let mut files = self.files.lock().unwrap_or_else(|e| e.into_inner());
        Ok(files
            .entry(path.to_path_buf())
            .or_insert(content)
            .clone())
    }

    fn lookup(&self, path: &Path) -> Option<Arc<str>> {
        let files = self.files.lock().unwrap_or_else(|e| e.into_inner());
        files.get(path).cloned()
    }

    /// Number of distinct files loaded so far.
    pub fn len(&self) -> usize {
        let files = self.files.lock().unwrap_or_else(|e| e.into_inner());
        files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
