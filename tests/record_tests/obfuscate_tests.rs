//! Password obfuscation tests

use std::fs;

use taskslot::binio::{BinReader, BinWriter};
use taskslot::config::SyncStrategy;
use taskslot::record::obfuscate::{stored_form, xor_obfuscate, XOR_KEY};
use taskslot::record::{user, Record, User};
use tempfile::TempDir;

#[test]
fn test_xor_is_self_inverse() {
    for text in ["abc", "", "pässwörd", "\u{1F600}x"] {
        assert_eq!(xor_obfuscate(&xor_obfuscate(text)), text);
    }
}

#[test]
fn test_xor_changes_each_unit() {
    let obfuscated = xor_obfuscate("abc");
    let expected: Vec<u16> = "abc".encode_utf16().map(|u| u ^ XOR_KEY).collect();

    assert_eq!(obfuscated.encode_utf16().collect::<Vec<_>>(), expected);
    assert_ne!(obfuscated, "abc");
}

#[test]
fn test_new_user_holds_obfuscated_password() {
    let user = User::new(1, "Ana", "ana@example.com", "abc");

    assert_eq!(user.password, xor_obfuscate("abc"));
    assert!(user.password_matches("abc"));
    assert!(!user.password_matches("abx"));
}

#[test]
fn test_password_bytes_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.bin");

    let mut writer = BinWriter::open(&path, false, SyncStrategy::Never).unwrap();
    User::new(1, "Ana", "ana@example.com", "a").write_to(&mut writer).unwrap();
    writer.finish().unwrap();

    let bytes = fs::read(&path).unwrap();
    let field = user::PASSWORD_OFFSET as usize;
    // 'a' (0x61) ^ 'K' (0x4B) = 0x2A, then space padding
    assert_eq!(&bytes[field..field + 4], &[0x00, 0x2A, 0x00, b' ']);
}

#[test]
fn test_stored_form_applies_field_width() {
    let long = "p".repeat(30);

    assert_eq!(stored_form(&long).encode_utf16().count(), user::PASSWORD_WIDTH);
    assert_eq!(stored_form(&long), stored_form(&"p".repeat(20)));
}

#[test]
fn test_uppercase_password_survives_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.bin");

    let mut writer = BinWriter::open(&path, false, SyncStrategy::Never).unwrap();
    User::new(1, "Ana", "ana@example.com", "SECRET").write_to(&mut writer).unwrap();
    writer.finish().unwrap();

    let mut reader = BinReader::open(&path).unwrap();
    let user = User::read_from(&mut reader).unwrap();

    // 'S' ^ 'K' = 0x18: every unit of this password is a control character
    assert_eq!(user.password, xor_obfuscate("SECRET"));
    assert!(user.password_matches("SECRET"));
    assert!(!user.password_matches(""));
    assert!(!user.password_matches("X"));
    assert!(!user.password_matches("WRONG"));
}

#[test]
fn test_stored_form_keeps_control_characters() {
    assert_eq!(stored_form("abcXYZ"), xor_obfuscate("abcXYZ"));
    assert_ne!(stored_form("abcXYZ"), stored_form("abc"));
    // 'k' ^ 'K' is a space, indistinguishable from padding
    assert_eq!(stored_form("abck"), stored_form("abc"));
}
