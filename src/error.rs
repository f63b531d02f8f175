//! Error types for taskslot
//!
//! Provides a unified error type for all operations.
//!
//! "Not found" and "duplicate email" are expected outcomes and are modelled
//! as result variants in [`crate::store`], never as errors here.

use thiserror::Error;

/// Result type alias using TaskSlotError
pub type Result<T> = std::result::Result<T, TaskSlotError>;

/// Unified error type for taskslot operations
#[derive(Debug, Error)]
pub enum TaskSlotError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// Missing/unreadable/unwritable file or a read past end-of-file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bincode::Error> for TaskSlotError {
    fn from(err: bincode::Error) -> Self {
        TaskSlotError::Serialization(err.to_string())
    }
}
