//! Password obfuscation
//!
//! **This is not encryption.** Every UTF-16 code unit is XORed with one
//! fixed key, so anyone with the store file recovers the plain password by
//! applying the same transform. It exists only so stored bytes stay
//! compatible with existing user files; it is not a security boundary.

use crate::binio::normalize_raw_text;

use super::user::PASSWORD_WIDTH;

/// The fixed XOR key ('K')
pub const XOR_KEY: u16 = b'K' as u16;

/// XOR every code unit of `text` with [`XOR_KEY`]. Self-inverse.
pub fn xor_obfuscate(text: &str) -> String {
    let units: Vec<u16> = text.encode_utf16().map(|unit| unit ^ XOR_KEY).collect();
    String::from_utf16_lossy(&units)
}

/// The value the password field holds on disk for `password`
///
/// Obfuscated, then cut to the field width with the space padding removed.
/// Uppercase letters XOR to control characters, so nothing else is trimmed.
pub fn stored_form(password: &str) -> String {
    normalize_raw_text(&xor_obfuscate(password), PASSWORD_WIDTH)
}
