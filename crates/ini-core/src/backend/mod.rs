//! Storage backends behind the [`crate::IniReader`] facade.
//!
//! A backend owns "where the data lives and how a write reaches it".  Two
//! implementations exist:
//!
//! - [`FileBackend`]: parses the file once into a [`ConfigStore`], serves
//!   reads from memory, and rewrites the whole file on every write.  Works on
//!   every platform.
//! - `PrivateProfileBackend` (Windows only): delegates each read and write to
//!   the operating system's `GetPrivateProfileStringW` /
//!   `WritePrivateProfileStringW`, which patch single keys in place.
//!
//! Both expose the same semantics through [`ProfileBackend`]: a missing entry
//! reads as `None`, and a write creates the section and key when absent while
//! preserving every other entry in the file.
//!
//! # Thread safety
//!
//! Backends are plain single-threaded objects; writes take `&mut self`.
//! Sharing one across threads needs an external `Mutex`.  Nothing here locks
//! the file against other processes: if another program edits the file while
//! a write is in flight, the last writer wins.  `FileBackend` replaces the
//! file by rename; see [`file`] for what that keeps of a symlink and the
//! file's permissions.

use std::path::{Path, PathBuf};

use crate::domain::ConfigStore;
use crate::error::IniError;

pub mod file;
pub mod mock;

#[cfg(target_os = "windows")]
pub mod private_profile;

pub use file::FileBackend;
#[cfg(target_os = "windows")]
pub use private_profile::PrivateProfileBackend;

/// Key/value persistence keyed by file, section and key.
pub trait ProfileBackend {
    /// Path of the backing file.
    fn path(&self) -> &Path;

    /// Points the backend at another file and loads it.
    fn set_path(&mut self, path: PathBuf);

    /// Discards cached state and re-reads the backing file.
    fn reload(&mut self);

    /// Raw value of `[section] key`, or `None` when either is absent.
    ///
    /// Must not create anything.
    fn read(&self, section: &str, key: &str) -> Option<String>;

    /// Stores `[section] key = value` and persists it before returning.
    ///
    /// Callers validate names and values first (see
    /// [`crate::codec::validate_key_name`] and friends).
    ///
    /// # Errors
    ///
    /// Returns [`IniError`] if the change could not be persisted.  The
    /// backend's visible state is then unchanged.
    fn write(&mut self, section: &str, key: &str, value: &str) -> Result<(), IniError>;

    /// `true` if `[section]` exists.  The default goes through
    /// [`ProfileBackend::snapshot`]; in-memory backends look it up directly.
    fn has_section(&self, section: &str) -> bool {
        self.snapshot().section(section).is_some()
    }

    /// Full copy of the current sections and keys.
    fn snapshot(&self) -> ConfigStore;
}
