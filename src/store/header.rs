//! Store file header

use crate::binio::{BinReader, BinWriter, INT_SIZE};
use crate::error::Result;

/// Size of the header: three 32-bit integers
pub const HEADER_SIZE: u64 = 3 * INT_SIZE;

/// Bookkeeping at the start of every store file
///
/// - `total_records`: slots physically present, tombstones included
/// - `last_id`: highest id ever issued; the next insert gets `last_id + 1`
/// - `active_count`: slots whose active flag is set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub total_records: u32,
    pub last_id: u32,
    pub active_count: u32,
}

impl Header {
    pub fn read_from(reader: &mut BinReader) -> Result<Self> {
        reader.seek(0)?;
        Ok(Self {
            total_records: reader.read_u32()?,
            last_id: reader.read_u32()?,
            active_count: reader.read_u32()?,
        })
    }

    pub fn write_to(&self, writer: &mut BinWriter) -> Result<()> {
        writer.seek(0)?;
        writer.write_u32(self.total_records)?;
        writer.write_u32(self.last_id)?;
        writer.write_u32(self.active_count)
    }

    /// Number of tombstoned slots
    pub fn inactive_count(&self) -> u32 {
        self.total_records.saturating_sub(self.active_count)
    }
}
