//! Fixed-width UTF-16 text fields
//!
//! Shared by the reader, the writer and the password obfuscation so a value
//! compared in memory goes through exactly the same width rules as one read
//! back from disk.

use bytes::{Buf, BufMut, BytesMut};

/// Bytes per UTF-16 code unit
pub const CODE_UNIT_SIZE: usize = 2;

const PAD_UNIT: u16 = b' ' as u16;

/// Encode `text` into exactly `width` code units.
///
/// Longer input is truncated to its first `width` units; shorter input is
/// right-padded with spaces.
pub fn encode_text(text: &str, width: usize) -> BytesMut {
    let mut buf = BytesMut::with_capacity(width * CODE_UNIT_SIZE);
    let units = text
        .encode_utf16()
        .chain(std::iter::repeat(PAD_UNIT))
        .take(width);
    for unit in units {
        buf.put_u16(unit);
    }
    buf
}

/// Decode a fixed-width field and strip its trailing padding.
///
/// Unpaired surrogates (a pair split by truncation) decode to U+FFFD.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = decode_units(bytes);
    trim_padding(&text).to_string()
}

/// Decode a fixed-width field, stripping only the space padding.
///
/// For fields whose content may legitimately end in control characters,
/// such as an obfuscated password.
pub fn decode_raw_text(bytes: &[u8]) -> String {
    let text = decode_units(bytes);
    text.trim_end_matches(' ').to_string()
}

/// The value a field of `width` units holds after `text` is written and read
/// back.
pub fn normalize_text(text: &str, width: usize) -> String {
    decode_text(&encode_text(text, width))
}

/// [`normalize_text`] for fields read with [`decode_raw_text`]
pub fn normalize_raw_text(text: &str, width: usize) -> String {
    decode_raw_text(&encode_text(text, width))
}

fn decode_units(mut bytes: &[u8]) -> String {
    let mut units = Vec::with_capacity(bytes.len() / CODE_UNIT_SIZE);
    while bytes.remaining() >= CODE_UNIT_SIZE {
        units.push(bytes.get_u16());
    }
    String::from_utf16_lossy(&units)
}

// Control characters count as padding too: a zero-filled slot reads as "".
fn trim_padding(text: &str) -> &str {
    text.trim_end_matches(|c: char| c <= ' ' || c.is_whitespace())
}
