//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single acceptor thread (non-blocking accept loop, polls for shutdown)
//! - Worker thread pool fed over a bounded channel
//! - Commands routed through Engine

mod client;
mod connection;
mod server;

pub use client::Client;
pub use connection::Connection;
pub use server::{Server, ShutdownHandle};
