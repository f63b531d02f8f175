//! Binary Writer
//!
//! Read-write positional access to a store file, for patching in place and
//! appending.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use crate::config::SyncStrategy;
use crate::error::{Result, TaskSlotError};

use super::text::encode_text;

/// Writes fixed-width primitives to a file, creating it if absent
///
/// Dropping the writer releases the handle on every path (buffered bytes are
/// flushed best-effort). Call [`BinWriter::finish`] on the success path so
/// flush and sync errors reach the caller.
pub struct BinWriter {
    /// Buffered file handle
    file: BufWriter<File>,
    /// Whether `finish` fsyncs
    sync_strategy: SyncStrategy,
}

impl BinWriter {
    /// Open (or create) a file for writing
    ///
    /// With `append` the position starts at end-of-file, otherwise at 0.
    /// Existing contents are never truncated.
    pub fn open(path: &Path, append: bool, sync_strategy: SyncStrategy) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let mut file = BufWriter::new(file);
        if append {
            file.seek(SeekFrom::End(0))?;
        }

        Ok(Self {
            file,
            sync_strategy,
        })
    }

    /// Move to an absolute byte offset (flushes pending bytes first)
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Current byte offset
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.file.stream_position()?)
    }

    /// File length in bytes, including anything still buffered
    pub fn len(&mut self) -> Result<u64> {
        self.file.flush()?;
        Ok(self.file.get_ref().metadata()?.len())
    }

    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.file.write_all(&value.to_be_bytes())?;
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.file.write_all(&value.to_be_bytes())?;
        Ok(())
    }

    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.file.write_all(&[u8::from(value)])?;
        Ok(())
    }

    /// Write `text` as exactly `width` code units (truncated or space-padded)
    pub fn write_text(&mut self, text: &str, width: usize) -> Result<()> {
        let encoded = encode_text(text, width);
        self.file.write_all(&encoded)?;
        Ok(())
    }

    /// Write a `(day, month, year)` triple
    pub fn write_date(&mut self, day: i32, month: i32, year: i32) -> Result<()> {
        self.write_i32(day)?;
        self.write_i32(month)?;
        self.write_i32(year)
    }

    /// Flush, optionally fsync, and close
    pub fn finish(self) -> Result<()> {
        let file = self
            .file
            .into_inner()
            .map_err(|e| TaskSlotError::Io(e.into_error()))?;

        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }

        Ok(())
    }
}
