//! Task Store
//!
//! Owner ids are stored as given; nothing checks them against the user
//! store.

use std::path::{Path, PathBuf};

use crate::config::SyncStrategy;
use crate::error::Result;
use crate::record::task::{self, DESCRIPTION_WIDTH};
use crate::record::Task;

use super::{Header, RecordStore, UpdateOutcome};

/// Record store for [`Task`]s
pub struct TaskStore {
    records: RecordStore<Task>,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Self {
        Self {
            records: RecordStore::new(path, sync_strategy),
        }
    }

    pub fn path(&self) -> &Path {
        self.records.path()
    }

    pub fn header(&self) -> Result<Header> {
        self.records.read_header()
    }

    /// Append a pending task and return its id
    pub fn create(
        &self,
        owner_id: u32,
        description: &str,
        day: i32,
        month: i32,
        year: i32,
    ) -> Result<u32> {
        self.records
            .insert_with(|id| Task::new(id, owner_id, description, day, month, year))
    }

    pub fn find_by_id(&self, id: u32) -> Result<Option<Task>> {
        self.records.find_by_id(id)
    }

    /// Active tasks, optionally only those of one owner, in insertion order
    pub fn list_active(&self, owner_id: Option<u32>) -> Result<Vec<Task>> {
        self.records
            .list(|task| owner_id.map_or(true, |owner| task.owner_id == owner))
    }

    pub fn list_by_owner(&self, owner_id: u32) -> Result<Vec<Task>> {
        self.list_active(Some(owner_id))
    }

    pub fn list_pending(&self, owner_id: u32) -> Result<Vec<Task>> {
        self.records.list(|task| task.owner_id == owner_id && !task.done)
    }

    pub fn list_completed(&self, owner_id: u32) -> Result<Vec<Task>> {
        self.records.list(|task| task.owner_id == owner_id && task.done)
    }

    /// Flip the done flag
    pub fn toggle_done(&self, id: u32) -> Result<UpdateOutcome> {
        self.records
            .update_field(id, task::DONE_OFFSET, |current, writer| {
                writer.write_bool(!current.done)
            })
    }

    /// Set the done flag to `done`
    pub fn set_done(&self, id: u32, done: bool) -> Result<UpdateOutcome> {
        self.records
            .update_field(id, task::DONE_OFFSET, |_, writer| writer.write_bool(done))
    }

    pub fn mark_done(&self, id: u32) -> Result<UpdateOutcome> {
        self.set_done(id, true)
    }

    pub fn unmark_done(&self, id: u32) -> Result<UpdateOutcome> {
        self.set_done(id, false)
    }

    /// Replace the description field only
    pub fn edit_description(&self, id: u32, description: &str) -> Result<UpdateOutcome> {
        self.records
            .update_field(id, task::DESCRIPTION_OFFSET, |_, writer| {
                writer.write_text(description, DESCRIPTION_WIDTH)
            })
    }

    pub fn delete(&self, id: u32) -> Result<UpdateOutcome> {
        self.records.logical_delete(id)
    }
}
