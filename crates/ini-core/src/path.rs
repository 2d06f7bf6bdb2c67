//! Resolves a caller-supplied file name to the INI file's full path.
//!
//! Rules, applied in order:
//!
//! 1. An empty name becomes `default.ini`.
//! 2. A name without an extension gets `.ini` appended (`settings` →
//!    `settings.ini`).  A name that already has an extension keeps it.
//! 3. An absolute path, or any path carrying a root or drive prefix, is used
//!    as-is.
//! 4. Anything else is placed in the directory that contains the running
//!    executable.
//!
//! # Why the executable's directory? (for beginners)
//!
//! Most programs resolve relative paths against the *current working
//! directory*, which depends on how the program was launched (a shortcut, a
//! terminal in some other folder, a service manager...).  Anchoring to the
//! executable instead means a `settings.ini` shipped next to the binary is
//! always found, whatever the launch context.

use std::path::{Component, Path, PathBuf};

use tracing::warn;

/// File name used when the caller passes an empty name.
pub const DEFAULT_FILE_NAME: &str = "default.ini";

/// Extension appended to names that have none.
pub const DEFAULT_EXTENSION: &str = "ini";

/// Resolves `filename` against the running executable's directory.
///
/// Never fails: when the executable's location cannot be determined the
/// normalised relative name is returned and a warning is logged.
pub fn resolve(filename: &str) -> PathBuf {
    let base = executable_dir();
    if base.is_none() {
        warn!("cannot determine executable directory; {filename:?} stays relative");
    }
    resolve_from(filename, base.as_deref())
}

/// Same as [`resolve`] but with an explicit base directory.
///
/// `base_dir = None` reproduces the "executable directory unknown" fallback.
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
/// use ini_core::path::resolve_from;
///
/// let base = Path::new("/opt/game");
/// assert_eq!(resolve_from("video", Some(base)), base.join("video.ini"));
/// assert_eq!(resolve_from("", Some(base)), base.join("default.ini"));
/// ```
pub fn resolve_from(filename: &str, base_dir: Option<&Path>) -> PathBuf {
    let name = normalise_name(filename);

    if is_rooted(&name) {
        return name;
    }

    match base_dir {
        Some(dir) => dir.join(name),
        None => name,
    }
}

/// Applies the empty-name default and the extension rule.
fn normalise_name(filename: &str) -> PathBuf {
    if filename.trim().is_empty() {
        return PathBuf::from(DEFAULT_FILE_NAME);
    }

    let mut name = PathBuf::from(filename);
    if name.extension().is_none() {
        name.set_extension(DEFAULT_EXTENSION);
    }
    name
}

/// `true` for absolute paths and for paths that start with a root (`\x`) or a
/// drive/UNC prefix (`C:x`), which `Path::is_absolute` alone does not cover on
/// Windows.
fn is_rooted(path: &Path) -> bool {
    path.is_absolute()
        || path.has_root()
        || matches!(path.components().next(), Some(Component::Prefix(_)))
}

/// Directory containing the running executable, if it can be determined.
fn executable_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
