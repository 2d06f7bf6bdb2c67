//! Conversion between raw stored strings and typed values.
//!
//! Every key stores a single raw string.  Typed reads parse that string on
//! demand and typed writes format a value into it; nothing typed is cached.
//!
//! | Type                  | Read rule                                     | Written as        |
//! |-----------------------|-----------------------------------------------|-------------------|
//! | `String`              | returned as stored                            | as given          |
//! | `i32`, `i64`, `u32`   | leading decimal prefix, else `0`              | `%d`              |
//! | `f32`, `f64`          | full parse, else leading decimal prefix, else `0.0` | `{:.6}`     |
//! | `bool`                | `true`/`false` (any case), else the default  | `true` / `false`  |
//!
//! # Permissive numbers
//!
//! A number that cannot be parsed reads as zero rather than failing or
//! falling back to the caller's default: `"abc"` is `0`, `"42px"` is `42`.
//! Integers that do not fit the requested type also read as `0`.
//!
//! # Booleans
//!
//! Only the words `true` and `false` are recognised (case-insensitive,
//! surrounding whitespace ignored).  Anything else, including `1`, `yes` or
//! `on`, reads as the caller-supplied default.
//!
//! # Floats
//!
//! Floats are always written in fixed-point with six fractional digits
//! (`1.5` → `"1.500000"`), never in scientific notation, so a value survives
//! a write/read cycle to that precision.

/// Number of fractional digits used when writing floats.
pub const FLOAT_PRECISION: usize = 6;

/// A type that can be stored in an INI key.
pub trait IniValue: Sized {
    /// Converts a stored raw string to `Self`.
    ///
    /// `default` is only consulted by types whose parse can "not match"
    /// (booleans); numeric types resolve garbage to zero.
    fn from_raw(raw: &str, default: Self) -> Self;

    /// Canonical string form written to the file.
    fn to_raw(&self) -> String;

    /// Zero/empty value used when the caller supplies no default.
    fn fallback() -> Self;
}

impl IniValue for String {
    fn from_raw(raw: &str, _default: Self) -> Self {
        raw.to_string()
    }

    fn to_raw(&self) -> String {
        self.clone()
    }

    fn fallback() -> Self {
        String::new()
    }
}

impl IniValue for bool {
    fn from_raw(raw: &str, default: Self) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            true
        } else if trimmed.eq_ignore_ascii_case("false") {
            false
        } else {
            default
        }
    }

    fn to_raw(&self) -> String {
        let word = if *self { "true" } else { "false" };
        word.to_string()
    }

    fn fallback() -> Self {
        false
    }
}

macro_rules! impl_int_value {
    ($($t:ty),*) => {$(
        impl IniValue for $t {
            fn from_raw(raw: &str, _default: Self) -> Self {
                integer_prefix(raw)
                    .and_then(|digits| digits.parse::<$t>().ok())
                    .unwrap_or(0)
            }

            fn to_raw(&self) -> String {
                self.to_string()
            }

            fn fallback() -> Self {
                0
            }
        }
    )*};
}

macro_rules! impl_float_value {
    ($($t:ty),*) => {$(
        impl IniValue for $t {
            fn from_raw(raw: &str, _default: Self) -> Self {
                let trimmed = raw.trim();
                if let Ok(v) = trimmed.parse::<$t>() {
                    return v;
                }
                float_prefix(trimmed)
                    .and_then(|prefix| prefix.parse::<$t>().ok())
                    .unwrap_or(0.0)
            }

            fn to_raw(&self) -> String {
                format!("{:.*}", FLOAT_PRECISION, self)
            }

            fn fallback() -> Self {
                0.0
            }
        }
    )*};
}

impl_int_value!(i32, i64, u32);
impl_float_value!(f32, f64);

/// Returns the `[sign]digits` prefix of `raw` after leading whitespace, or
/// `None` if there are no digits.
fn integer_prefix(raw: &str) -> Option<&str> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    (end > digits_start).then(|| &s[..end])
}

/// Returns the longest prefix of `s` that looks like a decimal float
/// (`[sign]digits[.digits][e[sign]digits]`), or `None` if there is no digit
/// in the mantissa.
fn float_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Only take the exponent if at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

// ── Tests ─────────────────────────────────────────────────────────────────────
