//! Error and warning types shared by every layer of `ini-core`.
//!
//! Two very different kinds of "something went wrong" exist in this crate:
//!
//! - [`IniError`] is returned by **write** operations.  Writing can genuinely
//!   fail (read-only directory, disk full, a name that cannot be expressed in
//!   the file format) and callers need to know about it.
//! - [`ParseWarning`] is produced while **reading** a file.  A malformed line
//!   never aborts a parse; it is recorded, logged, and skipped so the rest of
//!   the file still loads.
//!
//! Typed reads have no error type at all: a missing key returns the caller's
//! default and unparsable numbers become zero.

use std::path::PathBuf;

use thiserror::Error;

/// Which kind of name was rejected by [`IniError::InvalidName`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Section,
    Key,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Section => f.write_str("section"),
            NameKind::Key => f.write_str("key"),
        }
    }
}

/// Errors returned by write operations.
#[derive(Debug, Error)]
pub enum IniError {
    /// Persisting the rendered file failed.
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but could not be read, so rewriting it would drop
    /// entries that were never loaded.  The file is left untouched.
    #[error("cannot read {path}; refusing to overwrite it: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is a single-byte (Latin-1) file and the new contents have a
    /// character it cannot hold.
    #[error("{path} is not UTF-8 and cannot store characters above U+00FF")]
    Unencodable { path: PathBuf },

    /// The operating system's private-profile API reported a failure.
    #[error("profile API failed for {path}: {message}")]
    Platform { path: PathBuf, message: String },

    /// The name is empty or would not survive a write/parse cycle.
    #[error("invalid {kind} name: {name:?}")]
    InvalidName { kind: NameKind, name: String },

    /// The value contains a line break; multi-line values are not supported.
    #[error("value for [{section}] {key} contains a line break")]
    InvalidValue { section: String, key: String },
}

/// A non-fatal problem found on one line of an INI file.
///
/// Every variant carries the 1-based line number so a warning can be traced
/// back to the offending text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// `[name` with no closing bracket.
    #[error("line {line}: unterminated section header")]
    UnterminatedSection { line: usize },

    /// `[]` or `[   ]`.
    #[error("line {line}: empty section name")]
    EmptySectionName { line: usize },

    /// A `key = value` line appeared before the first section header.
    #[error("line {line}: key {key:?} appears before any section header")]
    KeyOutsideSection { line: usize, key: String },

    /// `= value` with nothing before the separator.
    #[error("line {line}: empty key name")]
    EmptyKey { line: usize },

    /// Not a comment, header, or `key = value` pair.
    #[error("line {line}: unrecognised line")]
    Unrecognized { line: usize },
}

impl ParseWarning {
    /// Returns the 1-based line number the warning refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseWarning::UnterminatedSection { line }
            | ParseWarning::EmptySectionName { line }
            | ParseWarning::KeyOutsideSection { line, .. }
            | ParseWarning::EmptyKey { line }
            | ParseWarning::Unrecognized { line } => *line,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
