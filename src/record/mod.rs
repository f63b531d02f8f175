//! Record Codec Module
//!
//! Maps entities to and from their fixed-size slot layout.
//!
//! ## Slot Layouts
//! ```text
//! User (245 bytes)
//! ┌────────┬────────────┬────────────┬──────────────┬────────────┐
//! │ id (4) │ name (120) │ email (80) │ password (40)│ active (1) │
//! └────────┴────────────┴────────────┴──────────────┴────────────┘
//!
//! Task (222 bytes)
//! ┌────────┬───────────┬──────────────────┬──────────┬────────────┬───────────────┐
//! │ id (4) │ owner (4) │ description (200)│ done (1) │ active (1) │ d/m/y (4+4+4) │
//! └────────┴───────────┴──────────────────┴──────────┴────────────┴───────────────┘
//! ```
//!
//! Each layout exposes its field offsets as constants so the store can patch
//! a single field without recomputing positions at the call site.

pub mod obfuscate;
pub mod task;
pub mod user;

pub use task::Task;
pub use user::{User, UserProfile};

use crate::binio::{BinReader, BinWriter};
use crate::error::Result;

/// An entity with a fixed-size on-disk encoding
pub trait Record: Sized {
    /// Encoded size of one slot in bytes
    const SIZE: u64;

    /// Offset of the active flag within a slot
    const ACTIVE_OFFSET: u64;

    /// Entity name used in log lines
    const KIND: &'static str;

    fn id(&self) -> u32;

    fn is_active(&self) -> bool;

    /// Decode one slot starting at the reader's current position.
    ///
    /// Consumes exactly `SIZE` bytes.
    fn read_from(reader: &mut BinReader) -> Result<Self>;

    /// Encode one slot at the writer's current position.
    ///
    /// Writes exactly `SIZE` bytes; oversized text is truncated.
    fn write_to(&self, writer: &mut BinWriter) -> Result<()>;
}
