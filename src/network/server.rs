//! TCP Server
//!
//! Accepts connections and dispatches them to worker threads.

use std::io::ErrorKind;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, Receiver, TrySendError};

use crate::config::Config;
use crate::engine::Engine;
use crate::error::{Result, TaskSlotError};

use super::Connection;

/// How long the acceptor sleeps when no connection is pending
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// TCP server for the task service
pub struct Server {
    config: Config,
    engine: Arc<Engine>,
    listener: TcpListener,
    shutdown: Arc<AtomicBool>,
}

/// Cloneable handle that stops a running [`Server`]
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandle {
    /// Stop accepting; `Server::run` returns once workers drain
    pub fn shutdown(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

impl Server {
    /// Validate the config and bind the listen address
    pub fn bind(config: Config, engine: Arc<Engine>) -> Result<Self> {
        config.validate()?;

        let listener = TcpListener::bind(&config.listen_addr).map_err(|e| {
            TaskSlotError::Network(format!("Failed to bind {}: {}", config.listen_addr, e))
        })?;
        listener.set_nonblocking(true)?;

        Ok(Self {
            config,
            engine,
            listener,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The bound address (useful when listening on port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            flag: Arc::clone(&self.shutdown),
        }
    }

    /// Serve until shutdown is signalled (blocking)
    pub fn run(&self) -> Result<()> {
        let (sender, receiver) = channel::bounded::<TcpStream>(self.config.max_connections);

        let mut workers = Vec::with_capacity(self.config.worker_threads);
        for n in 0..self.config.worker_threads {
            workers.push(self.spawn_worker(n, receiver.clone())?);
        }
        drop(receiver);

        tracing::info!(
            "Listening on {} with {} workers",
            self.local_addr()?,
            self.config.worker_threads
        );

        while !self.shutdown.load(Ordering::Relaxed) {
            match self.listener.accept() {
                Ok((stream, peer)) => {
                    if let Err(e) = stream.set_nonblocking(false) {
                        tracing::warn!("Dropping {}: cannot switch to blocking mode: {}", peer, e);
                        continue;
                    }
                    match sender.try_send(stream) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            tracing::warn!("Connection queue full, rejecting {}", peer);
                        }
                        Err(TrySendError::Disconnected(_)) => {
                            tracing::error!("All workers exited, stopping acceptor");
                            break;
                        }
                    }
                }
                Err(ref e) if e.kind() == ErrorKind::WouldBlock => {
                    thread::sleep(ACCEPT_POLL_INTERVAL);
                }
                Err(e) => {
                    tracing::warn!("Accept failed: {}", e);
                }
            }
        }

        tracing::info!("Shutting down, waiting for workers");
        drop(sender);
        for worker in workers {
            if worker.join().is_err() {
                tracing::error!("Worker thread panicked");
            }
        }

        Ok(())
    }

    fn spawn_worker(&self, n: usize, receiver: Receiver<TcpStream>) -> Result<JoinHandle<()>> {
        let engine = Arc::clone(&self.engine);
        let read_ms = self.config.read_timeout_ms;
        let write_ms = self.config.write_timeout_ms;

        let handle = thread::Builder::new()
            .name(format!("taskslot-worker-{}", n))
            .spawn(move || {
                for stream in receiver.iter() {
                    let served = Connection::new(stream, Arc::clone(&engine)).and_then(|mut conn| {
                        conn.set_timeouts(read_ms, write_ms)?;
                        conn.handle()
                    });
                    if let Err(e) = served {
                        tracing::warn!("Connection ended with error: {}", e);
                    }
                }
            })?;

        Ok(handle)
    }
}
