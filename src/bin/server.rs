//! taskslot Server Binary
//!
//! Starts the TCP server for the task service.

use std::sync::Arc;

use clap::Parser;
use taskslot::config::SyncStrategy;
use taskslot::network::Server;
use taskslot::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// taskslot Server
#[derive(Parser, Debug)]
#[command(name = "taskslot-server")]
#[command(about = "Task tracker backed by a binary record store")]
#[command(version)]
struct Args {
    /// Data directory (holds users.bin and tasks.bin)
    #[arg(short, long, default_value = "./taskslot_data")]
    data_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Worker threads serving connections
    #[arg(short, long, default_value = "8")]
    workers: usize,

    /// Maximum queued connections
    #[arg(short, long, default_value = "256")]
    max_connections: usize,

    /// fsync after every write session
    #[arg(long)]
    sync: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,taskslot=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("taskslot Server v{}", taskslot::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);
    tracing::info!("Listen address: {}", args.listen);

    let sync_strategy = if args.sync {
        SyncStrategy::EveryWrite
    } else {
        SyncStrategy::Never
    };

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .listen_addr(&args.listen)
        .worker_threads(args.workers)
        .max_connections(args.max_connections)
        .sync_strategy(sync_strategy)
        .build();

    let engine = match Engine::open(config.clone()) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            std::process::exit(1);
        }
    };

    let server = match Server::bind(config, engine) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
