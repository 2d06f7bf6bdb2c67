//! Line-oriented INI parser.
//!
//! Format:
//! ```text
//! [SectionName]
//! key1 = value1
//! key2 = "quoted value with spaces"
//! ; a comment
//! # another comment
//! // a third comment style
//! ```
//!
//! Each line is handled on its own:
//!
//! 1. Spaces, tabs and stray carriage returns are trimmed from both ends.
//! 2. Blank lines and lines starting with `;`, `#` or `//` are skipped.
//! 3. `[name]` opens (or re-opens) a section and makes it current.
//! 4. `key = value` is split on the first `=`; both halves are trimmed and one
//!    pair of surrounding double quotes is removed from the value.
//!
//! Anything else is recorded as a [`ParseWarning`] and skipped, so a single
//! bad line never hides the rest of the file.

use std::path::Path;

use tracing::{debug, warn};

use crate::codec::encoding::{decode, TextEncoding};
use crate::domain::ConfigStore;
use crate::error::ParseWarning;

/// Prefixes that mark a whole line as a comment.
pub const COMMENT_PREFIXES: [&str; 3] = [";", "#", "//"];

/// Result of parsing: the populated store plus any non-fatal warnings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parsed {
    pub store: ConfigStore,
    pub warnings: Vec<ParseWarning>,
    /// Encoding the file was read with; rewrites must use the same one.
    pub encoding: TextEncoding,
    /// The file exists (or may exist) but could not be read.  The store is
    /// empty and does not reflect what is on disk.
    pub unreadable: bool,
}

/// Parses INI text into a [`ConfigStore`].
///
/// # Examples
///
/// ```rust
/// use ini_core::codec::parse_str;
///
/// let parsed = parse_str("[A]\nx=1\n[A]\ny=2\n");
/// let section = parsed.store.section("A").unwrap();
/// assert_eq!(section.get("x"), Some("1"));
/// assert_eq!(section.get("y"), Some("2"));
/// assert!(parsed.warnings.is_empty());
/// ```
pub fn parse_str(text: &str) -> Parsed {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut parsed = Parsed::default();
    // Index into the store's section list; `None` until the first header.
    let mut current: Option<usize> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = trim_line(raw_line);

        if line.is_empty() || is_comment(line) {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            match rest.find(']') {
                None => parsed
                    .warnings
                    .push(ParseWarning::UnterminatedSection { line: line_no }),
                Some(end) => {
                    let name = trim_line(&rest[..end]);
                    if name.is_empty() {
                        parsed
                            .warnings
                            .push(ParseWarning::EmptySectionName { line: line_no });
                    } else {
                        current = Some(parsed.store.section_index_or_insert(name));
                    }
                }
            }
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            parsed
                .warnings
                .push(ParseWarning::Unrecognized { line: line_no });
            continue;
        };

        let key = trim_line(raw_key);
        if key.is_empty() {
            parsed.warnings.push(ParseWarning::EmptyKey { line: line_no });
            continue;
        }

        let section = current.and_then(|i| parsed.store.section_at_mut(i));
        match section {
            Some(section) => {
                section.insert(key, strip_quotes(trim_line(raw_value)));
            }
            None => parsed.warnings.push(ParseWarning::KeyOutsideSection {
                line: line_no,
                key: key.to_string(),
            }),
        }
    }

    parsed
}

/// Reads and parses the file at `path`.
///
/// A missing file is not an error: the result is an empty store, which is
/// what a first run looks like.  Warnings are logged at `warn` level and also
/// returned.
///
/// # Errors
///
/// Returns the I/O error for any read failure other than "not found".
pub fn load_file(path: &Path) -> std::io::Result<Parsed> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no INI file at {}, starting empty", path.display());
            return Ok(Parsed::default());
        }
        Err(e) => return Err(e),
    };

    let (text, encoding) = decode(bytes);
    if encoding == TextEncoding::Latin1 {
        debug!("{} is not UTF-8, reading it as Latin-1", path.display());
    }

    let mut parsed = parse_str(&text);
    parsed.encoding = encoding;

    for warning in &parsed.warnings {
        warn!("{}: {warning}", path.display());
    }
    debug!(
        "loaded {} section(s) from {}",
        parsed.store.len(),
        path.display()
    );
    Ok(parsed)
}

/// Like [`load_file`], but a read failure gives an empty store flagged
/// [`Parsed::unreadable`] instead of an error.
pub fn parse_file(path: &Path) -> Parsed {
    load_file(path).unwrap_or_else(|e| {
        warn!("cannot read {}: {e}; starting empty", path.display());
        Parsed {
            unreadable: true,
            ..Parsed::default()
        }
    })
}

/// Trims spaces, tabs, and line terminators from both ends.
fn trim_line(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

fn is_comment(line: &str) -> bool {
    COMMENT_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Removes exactly one pair of surrounding double quotes, if present.
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
