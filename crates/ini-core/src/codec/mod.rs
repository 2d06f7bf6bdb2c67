//! Text codec: INI text to [`crate::domain::ConfigStore`] and back.

pub mod encoding;
pub mod parse;
pub mod render;

pub use encoding::{decode, encode, TextEncoding};
pub use parse::{load_file, parse_file, parse_str, Parsed};
pub use render::{render, validate_key_name, validate_section_name, validate_value};
