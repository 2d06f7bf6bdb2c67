//! ini-cli library crate.
//!
//! Holds the command implementations behind the `inictl` binary so they can
//! be unit-tested against an in-memory backend.  `main.rs` only parses
//! arguments, sets up logging, and opens the file.

/// Command implementations (`get`, `set`, `dump`, `sections`, `path`).
pub mod commands;

pub use commands::{run, Command, ValueKind};
