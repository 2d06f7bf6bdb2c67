//! Serialises a [`ConfigStore`] back to INI text.
//!
//! Output layout:
//! ```text
//! [First]
//! key = value
//! padded = "  kept  "
//!
//! [Second]
//! other = 1
//! ```
//!
//! Sections and keys are written in store order.  Comments and blank-line
//! layout of the original file are not preserved: the store does not keep
//! them.
//!
//! The validators in this module reject names and values the parser would
//! read back differently, so every write is guaranteed to round-trip.

use crate::codec::parse::COMMENT_PREFIXES;
use crate::domain::ConfigStore;
use crate::error::{IniError, NameKind};

/// Renders the full store as INI text.
pub fn render(store: &ConfigStore) -> String {
    let mut out = String::new();

    for (i, section) in store.sections().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push('[');
        out.push_str(section.name());
        out.push_str("]\n");

        for key in section.keys() {
            out.push_str(key.name());
            out.push_str(" =");
            let value = key.value();
            if !value.is_empty() {
                out.push(' ');
                if needs_quotes(value) {
                    out.push('"');
                    out.push_str(value);
                    out.push('"');
                } else {
                    out.push_str(value);
                }
            }
            out.push('\n');
        }
    }

    out
}

/// `true` when writing `value` bare would not parse back to the same text.
fn needs_quotes(value: &str) -> bool {
    let trimmed = value.trim_matches(|c| matches!(c, ' ' | '\t'));
    trimmed.len() != value.len()
        || (value.len() >= 2 && value.starts_with('"') && value.ends_with('"'))
}

fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

fn has_outer_whitespace(s: &str) -> bool {
    s.starts_with([' ', '\t']) || s.ends_with([' ', '\t'])
}

/// Checks that `name` can be written as a `[name]` header.
///
/// # Errors
///
/// Returns [`IniError::InvalidName`] for empty names, names with surrounding
/// whitespace, line breaks, or a `]`.
pub fn validate_section_name(name: &str) -> Result<(), IniError> {
    if name.is_empty() || has_outer_whitespace(name) || has_line_break(name) || name.contains(']')
    {
        return Err(IniError::InvalidName {
            kind: NameKind::Section,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Checks that `name` can be written as the left-hand side of `name = value`.
///
/// # Errors
///
/// Returns [`IniError::InvalidName`] for empty names, names with surrounding
/// whitespace, line breaks, an `=`, or a leading `[` or comment marker.
pub fn validate_key_name(name: &str) -> Result<(), IniError> {
    let starts_badly =
        name.starts_with('[') || COMMENT_PREFIXES.iter().any(|p| name.starts_with(p));
    if name.is_empty()
        || has_outer_whitespace(name)
        || has_line_break(name)
        || name.contains('=')
        || starts_badly
    {
        return Err(IniError::InvalidName {
            kind: NameKind::Key,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Checks that `value` fits on a single line.
///
/// # Errors
///
/// Returns [`IniError::InvalidValue`] when the value contains `\n` or `\r`.
pub fn validate_value(section: &str, key: &str, value: &str) -> Result<(), IniError> {
    if has_line_break(value) {
        return Err(IniError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
