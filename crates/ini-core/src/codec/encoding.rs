//! Byte-level text encoding of INI files.
//!
//! Files are read as UTF-8 when they are valid UTF-8.  Anything else is
//! treated as a legacy single-byte ("ANSI") file and decoded as Latin-1,
//! which maps every byte to exactly one `char` (`0xFC` → `'ü'`).  Encoding
//! back with the same [`TextEncoding`] reproduces the original bytes, so
//! entries nobody touched survive a rewrite unchanged.
//!
//! Bytes `0x80..=0x9F` come back as C1 control characters rather than the
//! Windows-1252 punctuation they usually stand for; they still round-trip.

/// How a file's bytes map to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// One byte per character, `U+0000..=U+00FF`.
    Latin1,
}

/// Decodes `bytes`, falling back to Latin-1 when they are not UTF-8.
pub fn decode(bytes: Vec<u8>) -> (String, TextEncoding) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, TextEncoding::Utf8),
        Err(e) => {
            let text = e.into_bytes().into_iter().map(char::from).collect();
            (text, TextEncoding::Latin1)
        }
    }
}

/// Encodes `text` as `encoding`.
///
/// Returns `None` if `text` has a character the encoding cannot represent
/// (anything above `U+00FF` for Latin-1).
pub fn encode(text: &str, encoding: TextEncoding) -> Option<Vec<u8>> {
    match encoding {
        TextEncoding::Utf8 => Some(text.as_bytes().to_vec()),
        TextEncoding::Latin1 => text
            .chars()
            .map(|c| u8::try_from(u32::from(c)).ok())
            .collect(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
