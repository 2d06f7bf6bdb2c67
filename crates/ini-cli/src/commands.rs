//! `inictl` subcommands, executed against any [`ProfileBackend`].
//!
//! Output goes to a caller-supplied writer (stdout in the binary, a `Vec<u8>`
//! in tests).  Values are printed in the same canonical form they would be
//! written in, so `inictl get --as float` on `1.5` prints `1.500000`.

use std::io::Write;

use anyhow::{bail, Context};
use clap::{Subcommand, ValueEnum};
use serde::Serialize;

use ini_core::{IniReader, IniValue, ProfileBackend};

/// How a value is interpreted on `get` and `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ValueKind {
    /// Raw text, unchanged.
    #[default]
    String,
    /// Decimal integer; unparsable text reads as 0.
    Int,
    /// Fixed-point float with six fractional digits.
    Float,
    /// `true` or `false`.
    Bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the resolved path of the INI file.
    Path,

    /// Print one value.
    Get {
        section: String,
        key: String,
        /// Type used to interpret the stored text.
        #[arg(long = "as", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
        /// Printed when the key is missing.
        #[arg(long)]
        default: Option<String>,
    },

    /// Write one value, creating the section and key if needed.
    Set {
        section: String,
        key: String,
        value: String,
        /// Type the value is converted to before writing.
        #[arg(long = "as", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
    },

    /// Print every section and key.
    Dump {
        /// Emit JSON instead of INI text.
        #[arg(long)]
        json: bool,
    },

    /// List section names in file order.
    Sections,
}

/// JSON shape of one section for `dump --json`.
#[derive(Debug, Serialize)]
struct SectionDump<'a> {
    name: &'a str,
    keys: Vec<KeyDump<'a>>,
}

#[derive(Debug, Serialize)]
struct KeyDump<'a> {
    name: &'a str,
    value: &'a str,
}

/// Executes `command` against `reader`, writing human output to `out`.
///
/// # Errors
///
/// Returns an error if a write to the INI file fails, a `set` value cannot
/// be converted to the requested type, or `out` cannot be written.
pub fn run<B: ProfileBackend>(
    command: &Command,
    reader: &mut IniReader<B>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Path => writeln!(out, "{}", reader.path().display())?,

        Command::Get {
            section,
            key,
            kind,
            default,
        } => match read_canonical(reader, section, key, *kind, default.as_deref()) {
            Some(value) => writeln!(out, "{value}")?,
            None => bail!("[{section}] {key} is not set"),
        },

        Command::Set {
            section,
            key,
            value,
            kind,
        } => {
            let canonical = to_canonical(value, *kind)?;
            reader
                .write_string(section, key, &canonical)
                .with_context(|| format!("failed to write [{section}] {key}"))?;
            tracing::info!("set [{section}] {key} = {canonical}");
        }

        Command::Dump { json } => {
            let store = reader.snapshot();
            if *json {
                let sections: Vec<SectionDump<'_>> = store
                    .sections()
                    .map(|s| SectionDump {
                        name: s.name(),
                        keys: s
                            .keys()
                            .map(|k| KeyDump {
                                name: k.name(),
                                value: k.value(),
                            })
                            .collect(),
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &sections)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", ini_core::codec::render(&store))?;
            }
        }

        Command::Sections => {
            for section in reader.snapshot().sections() {
                writeln!(out, "{}", section.name())?;
            }
        }
    }
    Ok(())
}

/// Reads `[section] key` as `kind` and formats it canonically.
///
/// Returns `None` when the key is missing and no default was given.
fn read_canonical<B: ProfileBackend>(
    reader: &IniReader<B>,
    section: &str,
    key: &str,
    kind: ValueKind,
    default: Option<&str>,
) -> Option<String> {
    let fallback = || default.map(|d| to_canonical(d, kind).unwrap_or_else(|_| d.to_string()));
    if !reader.has_key(section, key) {
        return fallback();
    }

    let value = match kind {
        ValueKind::String => reader.read_string(section, key, ""),
        ValueKind::Int => reader.get(section, key, 0i64).to_raw(),
        ValueKind::Float => reader.get(section, key, 0.0f64).to_raw(),
        ValueKind::Bool => {
            let raw = reader.read_string(section, key, "");
            match parse_bool_strict(&raw) {
                Some(b) => b.to_raw(),
                // Neither word: the default wins, else show what is stored.
                None => fallback().unwrap_or(raw),
            }
        }
    };
    Some(value)
}

/// Converts user input to the text that would be stored for `kind`.
fn to_canonical(input: &str, kind: ValueKind) -> anyhow::Result<String> {
    Ok(match kind {
        ValueKind::String => input.to_string(),
        ValueKind::Int => i64::from_raw(input, 0).to_raw(),
        ValueKind::Float => f64::from_raw(input, 0.0).to_raw(),
        ValueKind::Bool => match parse_bool_strict(input) {
            Some(b) => b.to_raw(),
            None => bail!("{input:?} is not a boolean; use true or false"),
        },
    })
}

fn parse_bool_strict(input: &str) -> Option<bool> {
    // Feed opposite defaults: only a recognised word gives the same answer twice.
    let as_true = bool::from_raw(input, true);
    let as_false = bool::from_raw(input, false);
    (as_true == as_false).then_some(as_true)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
