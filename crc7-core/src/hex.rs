//! Hexadecimal text to byte conversion.
//!
//! Each byte is written as a base-16 integer: surrounding whitespace is
//! ignored, an optional `0x`/`0X` prefix and single `_` separators between
//! digits are accepted. Text that is not hexadecimal is a parse error. Text
//! that is hexadecimal but does not fit in a byte (`"100"`, `"-1"`) is a
//! validation error, never truncated.

use crate::error::{Crc7Error, Result};

/// Parse one hex byte such as `"ff"`, `"05"` or `"0x40"`.
///
/// # Errors
///
/// [`Crc7Error::Parse`] when the text is not a hex integer,
/// [`Crc7Error::Validation`] when it is one but lies outside 0..=255.
pub fn parse_hex_byte(text: &str) -> Result<u8> {
    let value = parse_hex_int(text)?;
    u8::try_from(value).map_err(|_| Crc7Error::out_of_byte_range(0, value))
}

/// Parse a sequence of hex bytes, one per item.
///
/// Validation errors carry the position of the offending item.
pub fn parse_hex_bytes<I, S>(args: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| parse_hex_byte(arg.as_ref()).map_err(|e| e.at_index(index)))
        .collect()
}

/// Parse a hex dump such as `"40 00 00 00 00 95"`, `"40:00:00"` or `"400000000095"`.
///
/// Tokens are separated by whitespace, `:` or `,`. A token of one or two digits
/// is a single byte; longer tokens are read as packed digit pairs and must
/// have an even number of digits.
pub fn parse_hex_string(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for token in text
        .split(|c: char| c.is_ascii_whitespace() || c == ':' || c == ',')
        .filter(|t| !t.is_empty())
    {
        let digits = strip_prefix(token);
        if digits.len() <= 2 {
            let byte = parse_hex_byte(token).map_err(|e| e.at_index(out.len()))?;
            out.push(byte);
            continue;
        }

        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(invalid_digit(token, c));
        }
        if digits.len() % 2 != 0 {
            return Err(Crc7Error::parse(token, "odd number of hex digits"));
        }
        // all ASCII from here, so byte offsets are char boundaries
        for i in (0..digits.len()).step_by(2) {
            let byte = u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| Crc7Error::parse(token, e.to_string()))?;
            out.push(byte);
        }
    }
    Ok(out)
}

/// Parse a signed hex integer, saturating at `i64` bounds.
fn parse_hex_int(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let prefixed = unsigned.len() != strip_prefix(unsigned).len();
    let mut digits = strip_prefix(unsigned);
    // "0x_ff" is accepted, "_ff" is not
    if prefixed {
        if let Some(rest) = digits.strip_prefix('_') {
            digits = rest;
        }
    }

    if digits.is_empty() {
        return Err(Crc7Error::parse(text, "no hex digits"));
    }
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err(Crc7Error::parse(text, "misplaced digit separator"));
    }

    let mut value: i64 = 0;
    for c in digits.chars().filter(|&c| c != '_') {
        let d = c.to_digit(16).ok_or_else(|| invalid_digit(text, c))?;
        value = value.saturating_mul(16).saturating_add(i64::from(d));
    }

    Ok(if negative { -value } else { value })
}

fn strip_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

fn invalid_digit(input: &str, c: char) -> Crc7Error {
    Crc7Error::parse(input, format!("invalid hex digit {:?}", c))
}
