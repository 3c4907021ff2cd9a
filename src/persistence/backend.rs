use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use snafu::ResultExt;

use super::error::*;
use super::KeyValueStore;

/// Volatile store, the in-process stand-in for browser local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store that keeps one `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Opens the store, creating the directory when it does not exist yet.
    pub fn open(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        std::fs::create_dir_all(&directory).context(CreateDirectorySnafu {
            path: directory.clone(),
        })?;

        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).context(ReadEntrySnafu { path }),
        }
    }

    /// Writes through a sibling temporary file so a crash never leaves half an entry.
    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let path = self.entry_path(key);
        let staging = path.with_extension("json.tmp");

        std::fs::write(&staging, value).context(WriteEntrySnafu {
            path: staging.clone(),
        })?;
        std::fs::rename(&staging, &path).context(WriteEntrySnafu { path })?;

        Ok(())
    }
}
