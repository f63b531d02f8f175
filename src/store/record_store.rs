//! Generic Record Store
//!
//! Insert, linear-scan lookup, targeted field patching and logical delete
//! over one file of fixed-size slots.

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::binio::{BinReader, BinWriter};
use crate::config::SyncStrategy;
use crate::error::{Result, TaskSlotError};
use crate::record::Record;

use super::{Header, UpdateOutcome, HEADER_SIZE};

/// A file of `R` records
///
/// Holds only the path: no handle and no cached records survive between
/// calls, so every operation sees whatever is on disk at that moment.
pub struct RecordStore<R: Record> {
    /// Path to the store file (created on first insert)
    path: PathBuf,

    /// Applied to every writer session
    sync_strategy: SyncStrategy,

    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RecordStore<R> {
    pub fn new(path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Self {
        Self {
            path: path.into(),
            sync_strategy,
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte offset of slot `index`
    pub fn slot_offset(index: u32) -> u64 {
        HEADER_SIZE + index as u64 * R::SIZE
    }

    // =========================================================================
    // Header
    // =========================================================================

    /// Read the header; a missing or too-short file is an empty store
    pub fn read_header(&self) -> Result<Header> {
        let len = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Header::default()),
            Err(e) => return Err(e.into()),
        };

        if len < HEADER_SIZE {
            return Ok(Header::default());
        }

        let mut reader = BinReader::open(&self.path)?;
        Header::read_from(&mut reader)
    }

    /// Overwrite the first `HEADER_SIZE` bytes
    pub fn write_header(&self, header: &Header) -> Result<()> {
        let mut writer = self.open_writer()?;
        header.write_to(&mut writer)?;
        writer.finish()
    }

    // =========================================================================
    // Insert
    // =========================================================================

    /// Append a new active record and return its id
    ///
    /// `build` receives the freshly issued id. The slot position comes from
    /// the header's `total_records`, not from the file length, so an
    /// under-reporting header means the tail slots get overwritten.
    pub fn insert_with<F>(&self, build: F) -> Result<u32>
    where
        F: FnOnce(u32) -> R,
    {
        let header = self.read_header()?;
        let id = header.last_id.checked_add(1).ok_or_else(|| {
            TaskSlotError::Storage(format!("{} id space exhausted", R::KIND))
        })?;
        let record = build(id);

        let mut writer = self.open_writer()?;
        if writer.len()? == 0 {
            Header::default().write_to(&mut writer)?;
        }

        let offset = Self::slot_offset(header.total_records);
        writer.seek(offset)?;
        record.write_to(&mut writer)?;
        writer.finish()?;

        self.write_header(&Header {
            total_records: header.total_records + 1,
            last_id: id,
            active_count: header.active_count + 1,
        })?;

        tracing::debug!(
            "Inserted {} id={} at slot {} (offset {})",
            R::KIND,
            id,
            header.total_records,
            offset
        );

        Ok(id)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// First active record with this id
    pub fn find_by_id(&self, id: u32) -> Result<Option<R>> {
        self.find(|record| record.id() == id)
    }

    /// First active record matching `predicate`, in slot order
    pub fn find<P>(&self, predicate: P) -> Result<Option<R>>
    where
        P: Fn(&R) -> bool,
    {
        let header = self.read_header()?;
        Ok(self.locate(&header, predicate)?.map(|(_, record)| record))
    }

    /// Every active record matching `predicate`, in slot (= insertion) order
    pub fn list<P>(&self, predicate: P) -> Result<Vec<R>>
    where
        P: Fn(&R) -> bool,
    {
        let header = self.read_header()?;
        let mut records = Vec::new();
        if header.total_records == 0 {
            return Ok(records);
        }

        let mut reader = BinReader::open(&self.path)?;
        reader.seek(Self::slot_offset(0))?;
        for _ in 0..header.total_records {
            let record = R::read_from(&mut reader)?;
            if record.is_active() && predicate(&record) {
                records.push(record);
            }
        }

        tracing::trace!(
            "Scanned {} {} slots, {} matched",
            header.total_records,
            R::KIND,
            records.len()
        );

        Ok(records)
    }

    /// Every active record
    pub fn list_active(&self) -> Result<Vec<R>> {
        self.list(|_| true)
    }

    /// Linear scan for the first active match, returning its slot offset
    ///
    /// Slots are contiguous, so after one seek to slot 0 each decode leaves
    /// the reader at the start of the next slot.
    fn locate<P>(&self, header: &Header, predicate: P) -> Result<Option<(u64, R)>>
    where
        P: Fn(&R) -> bool,
    {
        if header.total_records == 0 {
            return Ok(None);
        }

        let mut reader = BinReader::open(&self.path)?;
        reader.seek(Self::slot_offset(0))?;
        for index in 0..header.total_records {
            let record = R::read_from(&mut reader)?;
            if record.is_active() && predicate(&record) {
                return Ok(Some((Self::slot_offset(index), record)));
            }
        }

        Ok(None)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Patch one field of the active record `id` in place
    ///
    /// `write` is handed the current record and a writer already positioned
    /// at `field_offset` within its slot; it must write only that field.
    pub fn update_field<W>(&self, id: u32, field_offset: u64, write: W) -> Result<UpdateOutcome>
    where
        W: FnOnce(&R, &mut BinWriter) -> Result<()>,
    {
        debug_assert!(field_offset < R::SIZE);

        let header = self.read_header()?;
        let Some((slot, record)) = self.locate(&header, |r| r.id() == id)? else {
            return Ok(UpdateOutcome::NotFound);
        };

        let mut writer = self.open_writer()?;
        writer.seek(slot + field_offset)?;
        write(&record, &mut writer)?;
        writer.finish()?;

        tracing::debug!(
            "Patched {} id={} at offset {}",
            R::KIND,
            id,
            slot + field_offset
        );

        Ok(UpdateOutcome::Applied)
    }

    /// Clear the active flag of record `id` and decrement `active_count`
    ///
    /// The slot stays in place as a tombstone and `total_records` is
    /// unchanged. Deleting an already-deleted id is `NotFound` and leaves the
    /// header alone.
    pub fn logical_delete(&self, id: u32) -> Result<UpdateOutcome> {
        let header = self.read_header()?;
        let Some((slot, _)) = self.locate(&header, |r| r.id() == id)? else {
            return Ok(UpdateOutcome::NotFound);
        };

        let mut writer = self.open_writer()?;
        writer.seek(slot + R::ACTIVE_OFFSET)?;
        writer.write_bool(false)?;
        writer.finish()?;

        self.write_header(&Header {
            active_count: header.active_count.saturating_sub(1),
            ..header
        })?;

        tracing::debug!("Deleted {} id={} (slot kept as tombstone)", R::KIND, id);

        Ok(UpdateOutcome::Applied)
    }

    fn open_writer(&self) -> Result<BinWriter> {
        BinWriter::open(&self.path, false, self.sync_strategy)
    }
}
