//! Task record layout
//!
//! `owner_id` is not checked against the user store: a task can reference a
//! user that never existed or was deleted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::binio::{text_size, BinReader, BinWriter, BOOL_SIZE, DATE_SIZE, INT_SIZE};
use crate::error::Result;

use super::Record;

// =============================================================================
// Layout
// =============================================================================

pub const DESCRIPTION_WIDTH: usize = 100;

pub const ID_OFFSET: u64 = 0;
pub const OWNER_OFFSET: u64 = ID_OFFSET + INT_SIZE;
pub const DESCRIPTION_OFFSET: u64 = OWNER_OFFSET + INT_SIZE;
pub const DONE_OFFSET: u64 = DESCRIPTION_OFFSET + text_size(DESCRIPTION_WIDTH);
pub const ACTIVE_OFFSET: u64 = DONE_OFFSET + BOOL_SIZE;
pub const DATE_OFFSET: u64 = ACTIVE_OFFSET + BOOL_SIZE;

/// 4 + 4 + 200 + 1 + 1 + 12
pub const RECORD_SIZE: u64 = DATE_OFFSET + DATE_SIZE;

// =============================================================================
// Task
// =============================================================================

/// A to-do item owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub owner_id: u32,
    pub description: String,
    pub done: bool,
    pub active: bool,
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl Task {
    /// Build an active, pending task
    pub fn new(id: u32, owner_id: u32, description: &str, day: i32, month: i32, year: i32) -> Self {
        Self {
            id,
            owner_id,
            description: description.to_string(),
            done: false,
            active: true,
            day,
            month,
            year,
        }
    }
}

impl Record for Task {
    const SIZE: u64 = RECORD_SIZE;
    const ACTIVE_OFFSET: u64 = ACTIVE_OFFSET;
    const KIND: &'static str = "task";

    fn id(&self) -> u32 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn read_from(reader: &mut BinReader) -> Result<Self> {
        let id = reader.read_u32()?;
        let owner_id = reader.read_u32()?;
        let description = reader.read_text(DESCRIPTION_WIDTH)?;
        let done = reader.read_bool()?;
        let active = reader.read_bool()?;
        let (day, month, year) = reader.read_date()?;

        Ok(Self {
            id,
            owner_id,
            description,
            done,
            active,
            day,
            month,
            year,
        })
    }

    fn write_to(&self, writer: &mut BinWriter) -> Result<()> {
        writer.write_u32(self.id)?;
        writer.write_u32(self.owner_id)?;
        writer.write_text(&self.description, DESCRIPTION_WIDTH)?;
        writer.write_bool(self.done)?;
        writer.write_bool(self.active)?;
        writer.write_date(self.day, self.month, self.year)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {:02}/{:02}/{} | {}",
            self.id,
            self.description,
            self.day,
            self.month,
            self.year,
            if self.done { "Done" } else { "Pending" }
        )
    }
}
