//! In-memory backend for unit testing code built on [`crate::IniReader`].
//!
//! `MockBackend` never touches the disk.  Every successful write is recorded
//! in [`MockBackend::writes`] so tests can assert exactly what would have been
//! persisted, and `should_fail` simulates a write failure (read-only
//! directory, full disk) without needing a broken file system.
//!
//! ```rust
//! use ini_core::backend::mock::MockBackend;
//! use ini_core::IniReader;
//!
//! let mut reader = IniReader::with_backend(MockBackend::new("memory.ini"));
//! reader.write_int("Game", "level", 3).unwrap();
//!
//! assert_eq!(reader.read_int("Game", "level", 0), 3);
//! assert_eq!(reader.backend().writes.len(), 1);
//! ```

use std::path::{Path, PathBuf};

use crate::backend::ProfileBackend;
use crate::domain::ConfigStore;
use crate::error::IniError;

/// A backend that keeps everything in memory and records writes.
#[derive(Debug, Default)]
pub struct MockBackend {
    path: PathBuf,
    /// Current contents.
    pub store: ConfigStore,
    /// Each successful `(section, key, value)` write, in order.
    pub writes: Vec<(String, String, String)>,
    /// Number of `reload` calls.
    pub reloads: usize,
    /// When `true`, `write` returns an error and changes nothing.
    pub should_fail: bool,
}

impl MockBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Creates a mock pre-populated with `store`.
    pub fn with_store(path: impl Into<PathBuf>, store: ConfigStore) -> Self {
        Self {
            store,
            ..Self::new(path)
        }
    }
}

impl ProfileBackend for MockBackend {
    fn path(&self) -> &Path {
        &self.path
    }

    fn set_path(&mut self, path: PathBuf) {
        self.path = path;
        self.reload();
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn read(&self, section: &str, key: &str) -> Option<String> {
        self.store.get(section, key).map(str::to_string)
    }

    fn write(&mut self, section: &str, key: &str, value: &str) -> Result<(), IniError> {
        if self.should_fail {
            return Err(IniError::Io {
                path: self.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock failure"),
            });
        }
        self.store.set(section, key, value);
        self.writes
            .push((section.to_string(), key.to_string(), value.to_string()));
        Ok(())
    }

    fn has_section(&self, section: &str) -> bool {
        self.store.section(section).is_some()
    }

    fn snapshot(&self) -> ConfigStore {
        self.store.clone()
    }
}
