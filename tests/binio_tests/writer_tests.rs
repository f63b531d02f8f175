//! Tests for BinWriter
//!
//! These tests verify:
//! - File creation and non-truncating open
//! - Append vs. overwrite positioning
//! - Fixed-width text padding and truncation
//! - Byte-level encodings

use std::fs;
use std::path::PathBuf;

use taskslot::binio::{BinReader, BinWriter};
use taskslot::config::SyncStrategy;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.bin");
    (temp_dir, path)
}

fn open(path: &PathBuf, append: bool) -> BinWriter {
    BinWriter::open(path, append, SyncStrategy::Never).unwrap()
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_creates_file() {
    let (_temp, path) = setup_temp_path();
    assert!(!path.exists());

    let writer = open(&path, false);
    writer.finish().unwrap();

    assert!(path.exists());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn test_overwrite_mode_starts_at_zero_without_truncating() {
    let (_temp, path) = setup_temp_path();
    fs::write(&path, [0xAAu8; 8]).unwrap();

    let mut writer = open(&path, false);
    assert_eq!(writer.position().unwrap(), 0);
    writer.write_i32(1).unwrap();
    writer.finish().unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, vec![0, 0, 0, 1, 0xAA, 0xAA, 0xAA, 0xAA]);
}

#[test]
fn test_append_mode_starts_at_end() {
    let (_temp, path) = setup_temp_path();
    fs::write(&path, [0xAAu8; 4]).unwrap();

    let mut writer = open(&path, true);
    assert_eq!(writer.position().unwrap(), 4);
    writer.write_u32(7).unwrap();
    assert_eq!(writer.len().unwrap(), 8);
    writer.finish().unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[4..], &[0, 0, 0, 7]);
}

#[test]
fn test_finish_with_sync() {
    let (_temp, path) = setup_temp_path();

    let mut writer = BinWriter::open(&path, false, SyncStrategy::EveryWrite).unwrap();
    writer.write_bool(true).unwrap();
    writer.finish().unwrap();

    assert_eq!(fs::read(&path).unwrap(), vec![1]);
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_integer_and_bool_bytes() {
    let (_temp, path) = setup_temp_path();

    let mut writer = open(&path, false);
    writer.write_i32(-2).unwrap();
    writer.write_bool(true).unwrap();
    writer.write_bool(false).unwrap();
    writer.finish().unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, vec![0xFF, 0xFF, 0xFF, 0xFE, 0x01, 0x00]);
}

#[test]
fn test_write_text_pads_with_spaces() {
    let (_temp, path) = setup_temp_path();

    let mut writer = open(&path, false);
    writer.write_text("ab", 4).unwrap();
    writer.finish().unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, vec![0x00, b'a', 0x00, b'b', 0x00, b' ', 0x00, b' ']);
}

#[test]
fn test_write_text_truncates() {
    let (_temp, path) = setup_temp_path();

    let mut writer = open(&path, false);
    writer.write_text("abcdef", 3).unwrap();
    writer.write_i32(9).unwrap();
    writer.finish().unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 3 * 2 + 4);

    let mut reader = BinReader::open(&path).unwrap();
    assert_eq!(reader.read_text(3).unwrap(), "abc");
    assert_eq!(reader.read_i32().unwrap(), 9);
}

#[test]
fn test_write_text_empty_is_all_padding() {
    let (_temp, path) = setup_temp_path();

    let mut writer = open(&path, false);
    writer.write_text("", 5).unwrap();
    writer.finish().unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 10);
    let mut reader = BinReader::open(&path).unwrap();
    assert_eq!(reader.read_text(5).unwrap(), "");
}

#[test]
fn test_date_roundtrip_through_reader() {
    let (_temp, path) = setup_temp_path();

    let mut writer = open(&path, false);
    writer.write_date(31, 12, 1999).unwrap();
    writer.finish().unwrap();

    let mut reader = BinReader::open(&path).unwrap();
    assert_eq!(reader.read_date().unwrap(), (31, 12, 1999));
}

#[test]
fn test_seek_patches_in_place() {
    let (_temp, path) = setup_temp_path();

    let mut writer = open(&path, false);
    for value in [1, 2, 3] {
        writer.write_i32(value).unwrap();
    }
    writer.seek(4).unwrap();
    writer.write_i32(20).unwrap();
    writer.finish().unwrap();

    let mut reader = BinReader::open(&path).unwrap();
    assert_eq!(reader.read_i32().unwrap(), 1);
    assert_eq!(reader.read_i32().unwrap(), 20);
    assert_eq!(reader.read_i32().unwrap(), 3);
}

#[test]
fn test_dropped_writer_still_writes() {
    let (_temp, path) = setup_temp_path();

    {
        let mut writer = open(&path, false);
        writer.write_i32(5).unwrap();
    }

    assert_eq!(fs::read(&path).unwrap(), vec![0, 0, 0, 5]);
}
