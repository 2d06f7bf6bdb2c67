//! `inictl`: inspect and edit INI files from the command line.
//!
//! # Usage
//!
//! ```text
//! inictl [--file <NAME>] <COMMAND>
//!
//! Commands:
//!   path                                     Print the resolved file path
//!   get <SECTION> <KEY> [--as T] [--default D]
//!   set <SECTION> <KEY> <VALUE> [--as T]
//!   dump [--json]
//!   sections
//!
//! T is one of: string, int, float, bool
//! ```
//!
//! `--file` goes through the same resolution as the library: a bare name
//! like `settings` means `settings.ini` next to the executable, an absolute
//! path is used as-is.  Pass `--cwd` to resolve relative names against the
//! current directory instead, which is usually what you want when editing a
//! file by hand.
//!
//! # Environment variable overrides
//!
//! | Variable      | Default       | Description                     |
//! |---------------|---------------|---------------------------------|
//! | `INICTL_FILE` | `default.ini` | File name or path               |
//! | `RUST_LOG`    | `warn`        | Log filter (`tracing` syntax)   |

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ini_cli::{run, Command};
use ini_core::IniReader;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit sectioned `.ini` configuration files.
#[derive(Debug, Parser)]
#[command(name = "inictl", version)]
struct Cli {
    /// INI file name or path.  An empty name means `default.ini`.
    #[arg(long, short = 'f', default_value = "", env = "INICTL_FILE")]
    file: String,

    /// Resolve a relative `--file` against the current directory rather than
    /// the executable's directory.
    #[arg(long)]
    cwd: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Opens the INI file selected by `--file` / `--cwd`.
    fn open(&self) -> anyhow::Result<IniReader> {
        if self.cwd {
            let cwd = std::env::current_dir().context("cannot read current directory")?;
            let path = ini_core::path::resolve_from(&self.file, Some(&cwd));
            Ok(IniReader::open_path(path))
        } else {
            Ok(IniReader::open(&self.file))
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // `RUST_LOG` overrides the level; parse warnings show up at the default.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut reader = cli.open()?;
    debug!("using {}", reader.path().display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, &mut reader, &mut out)?;
    out.flush()?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
