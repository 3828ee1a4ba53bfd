//! Persistent result cache keyed by folder digest and part

use crate::error::CacheError;
use advent_core::Solution;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the cache file, relative to the working directory.
pub const DEFAULT_CACHE_FILE: &str = ".cache.json";

/// Key→answer store backed by a single JSON file.
///
/// The whole mapping is loaded once at construction and rewritten in full on
/// every flush. Writes are not atomic: a crash mid-write leaves a corrupt
/// file that the operator must delete by hand. The cache is disposable, so
/// deleting it only forces recomputation.
pub struct ResultCache {
    path: PathBuf,
    entries: HashMap<String, Solution>,
    auto_flush: bool,
}

impl ResultCache {
    /// Load the cache from `path`, starting empty if the file does not exist.
    ///
    /// A file that exists but fails to deserialize is fatal.
    pub fn load(path: &Path, auto_flush: bool) -> Result<Self, CacheError> {
        let entries = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|source| CacheError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            auto_flush,
        })
    }

    /// Pure lookup, no side effects.
    pub fn get(&self, key: &str) -> Option<&Solution> {
        self.entries.get(key)
    }

    /// Insert or overwrite the value for `key`.
    ///
    /// With auto-flush enabled the whole mapping is written back to disk
    /// immediately; otherwise the write is only visible in memory until an
    /// explicit [`flush`](Self::flush).
    pub fn put(&mut self, key: String, value: Solution) -> Result<(), CacheError> {
        self.entries.insert(key, value);

        if self.auto_flush {
            self.flush()?;
        }
        Ok(())
    }

    /// Serialize the entire in-memory mapping over the backing file.
    pub fn flush(&self) -> Result<(), CacheError> {
        let content = serde_json::to_string(&self.entries).map_err(CacheError::Serialize)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
