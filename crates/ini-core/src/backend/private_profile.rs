//! Windows backend built on the private-profile API.
//!
//! `GetPrivateProfileStringW` and `WritePrivateProfileStringW` have been part
//! of Windows since the 16-bit days.  They read and patch `.ini` files
//! directly, one key at a time, so this backend keeps no cache: every read
//! goes to the file and every write updates just the affected line.
//!
//! # Detecting a missing key
//!
//! The API has no "not found" result; it copies the caller's default into the
//! buffer instead.  We pass a sentinel default that cannot appear in a
//! single-line value and map it back to `None`.
//!
//! # Buffer sizing
//!
//! The API truncates to the buffer size and reports `size - 1` characters
//! when it did so, so the buffer is doubled until the value fits.

use std::path::{Path, PathBuf};

use tracing::debug;
use windows::core::{HSTRING, PCWSTR};
use windows::Win32::System::WindowsProgramming::{
    GetPrivateProfileStringW, WritePrivateProfileStringW,
};

use crate::backend::ProfileBackend;
use crate::codec::parse_file;
use crate::domain::ConfigStore;
use crate::error::IniError;

/// Default handed to the API so an absent key can be told apart from an
/// empty value.  Contains a newline, which no stored value can.
const ABSENT: &str = "\u{1}\n<absent>\n\u{1}";

const INITIAL_BUFFER: usize = 256;
const MAX_BUFFER: usize = 1 << 20;

/// Backend that defers to the Windows private-profile functions.
#[derive(Debug, Clone)]
pub struct PrivateProfileBackend {
    path: PathBuf,
}

impl PrivateProfileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileBackend for PrivateProfileBackend {
    fn path(&self) -> &Path {
        &self.path
    }

    fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }

    fn reload(&mut self) {
        // Nothing is cached.
    }

    fn read(&self, section: &str, key: &str) -> Option<String> {
        let app = HSTRING::from(section);
        let key = HSTRING::from(key);
        let absent = HSTRING::from(ABSENT);
        let file = HSTRING::from(self.path.as_os_str());

        let mut buf = vec![0u16; INITIAL_BUFFER];
        loop {
            // SAFETY: every pointer comes from an HSTRING that outlives the
            // call, and the output slice length is passed by the binding.
            let copied = unsafe {
                GetPrivateProfileStringW(
                    PCWSTR(app.as_ptr()),
                    PCWSTR(key.as_ptr()),
                    PCWSTR(absent.as_ptr()),
                    Some(&mut buf),
                    PCWSTR(file.as_ptr()),
                )
            } as usize;

            let truncated = copied + 1 >= buf.len();
            if truncated && buf.len() < MAX_BUFFER {
                buf.resize(buf.len() * 2, 0);
                continue;
            }

            let value = String::from_utf16_lossy(&buf[..copied.min(buf.len())]);
            return (value != ABSENT).then_some(value);
        }
    }

    fn write(&mut self, section: &str, key: &str, value: &str) -> Result<(), IniError> {
        let app = HSTRING::from(section);
        let key_w = HSTRING::from(key);
        let value_w = HSTRING::from(value);
        let file = HSTRING::from(self.path.as_os_str());

        // SAFETY: as in `read`, all strings outlive the call.
        unsafe {
            WritePrivateProfileStringW(
                PCWSTR(app.as_ptr()),
                PCWSTR(key_w.as_ptr()),
                PCWSTR(value_w.as_ptr()),
                PCWSTR(file.as_ptr()),
            )
        }
        .map_err(|e| IniError::Platform {
            path: self.path.clone(),
            message: e.message().to_string(),
        })?;

        debug!("wrote [{section}] {key} via profile API to {}", self.path.display());
        Ok(())
    }

    fn snapshot(&self) -> ConfigStore {
        // The profile API enumerates names but not values in one call; the
        // files it writes are plain INI, so the regular parser reads them.
        parse_file(&self.path).store
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
