//! Binary Reader
//!
//! Read-only positional access to a store file.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::Result;

use super::text::{decode_raw_text, decode_text, CODE_UNIT_SIZE};

/// Reads fixed-width primitives from a file opened read-only
///
/// Every read fails with `TaskSlotError::Io` (kind `UnexpectedEof`) if it
/// would run past the end of the file.
pub struct BinReader {
    /// Buffered file handle
    file: BufReader<File>,
    /// File length at open time
    len: u64,
}

impl BinReader {
    /// Open an existing file for reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        Ok(Self {
            file: BufReader::new(file),
            len,
        })
    }

    /// Move to an absolute byte offset
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Skip `bytes` forward from the current position
    pub fn skip(&mut self, bytes: u64) -> Result<()> {
        self.file.seek_relative(bytes as i64)?;
        Ok(())
    }

    /// Current byte offset
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.file.stream_position()?)
    }

    /// File length in bytes
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.file.read_exact(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.file.read_exact(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Nonzero byte = true
    pub fn read_bool(&mut self) -> Result<bool> {
        let mut buf = [0u8; 1];
        self.file.read_exact(&mut buf)?;
        Ok(buf[0] != 0)
    }

    /// Read exactly `width` UTF-16 code units, trailing padding removed
    pub fn read_text(&mut self, width: usize) -> Result<String> {
        let mut buf = vec![0u8; width * CODE_UNIT_SIZE];
        self.file.read_exact(&mut buf)?;
        Ok(decode_text(&buf))
    }

    /// Read exactly `width` UTF-16 code units, only space padding removed
    pub fn read_raw_text(&mut self, width: usize) -> Result<String> {
        let mut buf = vec![0u8; width * CODE_UNIT_SIZE];
        self.file.read_exact(&mut buf)?;
        Ok(decode_raw_text(&buf))
    }

    /// Read a `(day, month, year)` triple
    pub fn read_date(&mut self) -> Result<(i32, i32, i32)> {
        let day = self.read_i32()?;
        let month = self.read_i32()?;
        let year = self.read_i32()?;
        Ok((day, month, year))
    }
}
