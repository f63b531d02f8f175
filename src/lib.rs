//! # taskslot
//!
//! A small task tracker whose storage is a hand-rolled binary record store:
//! - Fixed-length records in one file per entity kind (users, tasks)
//! - A 12-byte header tracking slot count, id high-water mark and live count
//! - Linear-scan lookup, in-place field patching, logical (soft) deletion
//! - TCP service and client exposing the task-tracker entry points
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │              (Acceptor + Worker Pool)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! │          (Entry points, serialized mutations)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  UserStore  │          │  TaskStore  │
//!   │ (users.bin) │          │ (tasks.bin) │
//!   └──────┬──────┘          └──────┬──────┘
//!          └────────────┬───────────┘
//!                       ▼
//!          ┌─────────────────────────┐
//!          │ RecordStore + Codec     │
//!          │ BinReader / BinWriter   │
//!          └─────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod binio;
pub mod engine;
pub mod network;
pub mod protocol;
pub mod record;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use engine::Engine;
pub use error::{Result, TaskSlotError};
pub use record::{Task, User, UserProfile};
pub use store::{RegisterOutcome, UpdateOutcome};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of taskslot
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
