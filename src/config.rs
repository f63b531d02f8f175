//! Configuration for taskslot
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, TaskSlotError};

/// Main configuration for a taskslot instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the store files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── users.bin        (user record store)
    ///     └── tasks.bin        (task record store)
    pub data_dir: PathBuf,

    /// Whether writer sessions fsync before closing
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Max connections queued for the worker pool
    pub max_connections: usize,

    /// Number of worker threads serving connections
    pub worker_threads: usize,

    /// Connection read timeout (milliseconds, 0 = none)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 = none)
    pub write_timeout_ms: u64,
}

/// Durability of a single writer session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Flush to the OS only
    Never,

    /// fsync at the end of every writer session (safest, slowest)
    EveryWrite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./taskslot_data"),
            sync_strategy: SyncStrategy::Never,
            listen_addr: "127.0.0.1:8080".to_string(),
            max_connections: 256,
            worker_threads: 8,
            read_timeout_ms: 30_000,
            write_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.trim().is_empty() {
            return Err(TaskSlotError::Config("listen address is empty".to_string()));
        }
        if self.worker_threads == 0 {
            return Err(TaskSlotError::Config(
                "worker_threads must be at least 1".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(TaskSlotError::Config(
                "max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for both store files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the writer sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the maximum number of queued connections
    pub fn max_connections(mut self, count: usize) -> Self {
        self.config.max_connections = count;
        self
    }

    /// Set the worker pool size
    pub fn worker_threads(mut self, count: usize) -> Self {
        self.config.worker_threads = count;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
