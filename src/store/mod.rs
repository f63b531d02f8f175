//! Record Store Module
//!
//! One binary file per entity kind, holding a header and a contiguous array
//! of fixed-size slots.
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Header (12 bytes)                            │
//! │ ┌───────────────┬─────────────┬────────────┐ │
//! │ │ total_records │   last_id   │active_count│ │
//! │ └───────────────┴─────────────┴────────────┘ │
//! ├──────────────────────────────────────────────┤
//! │ Slot 0   (Record::SIZE bytes)                │
//! │ Slot 1                                       │
//! │ ...                                          │
//! │ Slot total_records - 1                       │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Record lifecycle
//! `ABSENT → ACTIVE` on insert, `ACTIVE → ACTIVE` on field updates,
//! `ACTIVE → INACTIVE` on logical delete. Inactive slots stay in the file as
//! tombstones forever; ids are never reused.
//!
//! ## Concurrency
//! None at this layer. Every call opens and closes its own handles, and the
//! read-check-write sequences (duplicate check then append, header read then
//! header rewrite) are separate file sessions. Callers that share a store
//! across threads must serialize mutations themselves (see `Engine`).

mod header;
mod record_store;
mod tasks;
mod users;

pub use header::{Header, HEADER_SIZE};
pub use record_store::RecordStore;
pub use tasks::TaskStore;
pub use users::UserStore;

/// Result of a targeted update or logical delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record was found and patched
    Applied,

    /// No active record has that id
    NotFound,
}

impl UpdateOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, UpdateOutcome::Applied)
    }
}

/// Result of a user registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Stored under the new id
    Registered(u32),

    /// An active user already has this email (case-insensitive)
    DuplicateEmail,
}
