//! Hand-rolled file backend: parse once, serve from memory, rewrite on write.
//!
//! # Write protocol
//!
//! 1. Clone the in-memory store and apply the change to the clone.
//! 2. Render the clone and encode it the way the file was read (UTF-8, or
//!    Latin-1 for legacy single-byte files).
//! 3. Write it to a hidden temp file next to the real file, copy the real
//!    file's permissions onto it, and rename it over the real file.
//! 4. Only now replace the in-memory store with the clone.
//!
//! The rename makes each write all-or-nothing for other readers of the file,
//! and step 4 keeps memory and disk consistent when the write fails.
//!
//! A symlinked `.ini` is resolved first, so the link stays a link and the
//! file it points at is the one replaced.  Ownership, ACLs and extended
//! attributes of the replaced file are not carried over; only its
//! permission bits are.
//!
//! # Unreadable files
//!
//! If the file exists but could not be read at load time (permissions, a
//! sharing violation), the store starts empty.  The next write re-reads the
//! file first and fails with [`IniError::Unreadable`] if it still cannot,
//! so entries that were never loaded are not overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::backend::ProfileBackend;
use crate::codec::{encode, load_file, parse_file, render, Parsed, TextEncoding};
use crate::domain::ConfigStore;
use crate::error::{IniError, ParseWarning};

/// INI file parsed into memory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
    store: ConfigStore,
    warnings: Vec<ParseWarning>,
    encoding: TextEncoding,
    unreadable: bool,
}

impl FileBackend {
    /// Loads `path`.  A missing or unreadable file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let parsed = parse_file(&path);
        Self::from_parsed(path, parsed)
    }

    fn from_parsed(path: PathBuf, parsed: Parsed) -> Self {
        Self {
            path,
            store: parsed.store,
            warnings: parsed.warnings,
            encoding: parsed.encoding,
            unreadable: parsed.unreadable,
        }
    }

    /// The parsed model.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Warnings from the most recent load.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Encoding used to read the file and to write it back.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// `true` if the last load failed for a reason other than a missing file.
    pub fn is_unreadable(&self) -> bool {
        self.unreadable
    }

    /// Retries a load that failed, so a write never replaces unread entries.
    fn ensure_loaded(&mut self) -> Result<(), IniError> {
        if !self.unreadable {
            return Ok(());
        }
        let parsed = load_file(&self.path).map_err(|source| IniError::Unreadable {
            path: self.path.clone(),
            source,
        })?;
        info!("{} is readable again, reloaded before writing", self.path.display());
        *self = Self::from_parsed(std::mem::take(&mut self.path), parsed);
        Ok(())
    }
}

impl ProfileBackend for FileBackend {
    fn path(&self) -> &Path {
        &self.path
    }

    fn set_path(&mut self, path: PathBuf) {
        *self = Self::open(path);
    }

    fn reload(&mut self) {
        let parsed = parse_file(&self.path);
        *self = Self::from_parsed(std::mem::take(&mut self.path), parsed);
    }

    fn read(&self, section: &str, key: &str) -> Option<String> {
        self.store.get(section, key).map(str::to_string)
    }

    fn write(&mut self, section: &str, key: &str, value: &str) -> Result<(), IniError> {
        self.ensure_loaded()?;

        let mut next = self.store.clone();
        next.set(section, key, value);

        let bytes =
            encode(&render(&next), self.encoding).ok_or_else(|| IniError::Unencodable {
                path: self.path.clone(),
            })?;
        persist(&self.path, &bytes)?;
        debug!("wrote [{section}] {key} to {}", self.path.display());

        self.store = next;
        Ok(())
    }

    fn has_section(&self, section: &str) -> bool {
        self.store.section(section).is_some()
    }

    fn snapshot(&self) -> ConfigStore {
        self.store.clone()
    }
}

/// Writes `contents` over `path` via a temp file and rename.
fn persist(path: &Path, contents: &[u8]) -> Result<(), IniError> {
    let io_err = |source| IniError::Io {
        path: path.to_path_buf(),
        source,
    };

    // Replace the file a symlink points at, not the link itself.
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }

    let tmp = temp_path(&target);
    let result = fs::write(&tmp, contents)
        .and_then(|()| match fs::metadata(&target) {
            Ok(meta) => fs::set_permissions(&tmp, meta.permissions()),
            Err(_) => Ok(()),
        })
        .and_then(|()| fs::rename(&tmp, &target));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    Ok(())
}

/// `dir/name.ini` → `dir/.name.ini.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
