//! Fixed-width text helper tests

use taskslot::binio::{decode_raw_text, decode_text, encode_text, normalize_raw_text, normalize_text};

#[test]
fn test_encode_is_exact_width() {
    assert_eq!(encode_text("", 4).len(), 8);
    assert_eq!(encode_text("abcd", 4).len(), 8);
    assert_eq!(encode_text("abcdefgh", 4).len(), 8);
}

#[test]
fn test_normalize_shorter_input_drops_trailing_whitespace() {
    assert_eq!(normalize_text("Buy milk", 100), "Buy milk");
    assert_eq!(normalize_text("Buy milk \t ", 100), "Buy milk");
}

#[test]
fn test_normalize_longer_input_keeps_first_units() {
    let long = "x".repeat(150);
    assert_eq!(normalize_text(&long, 100), "x".repeat(100));
}

#[test]
fn test_width_counts_utf16_units() {
    // U+1F600 takes two code units
    let text = "ab\u{1F600}";
    assert_eq!(encode_text(text, 4).len(), 8);
    assert_eq!(normalize_text(text, 4), text);
}

#[test]
fn test_truncation_inside_surrogate_pair_is_lossy() {
    let text = "ab\u{1F600}";
    assert_eq!(normalize_text(text, 3), "ab\u{FFFD}");
}

#[test]
fn test_decode_ignores_odd_trailing_byte() {
    assert_eq!(decode_text(&[0x00, b'a', 0x00]), "a");
}

#[test]
fn test_raw_decode_strips_only_spaces() {
    let text = "ab\u{18}\u{0E}";

    assert_eq!(normalize_raw_text(text, 8), text);
    assert_eq!(normalize_text(text, 8), "ab");
    assert_eq!(normalize_raw_text("ab \t  ", 8), "ab \t");
    assert_eq!(decode_raw_text(&encode_text("", 3)), "");
}
