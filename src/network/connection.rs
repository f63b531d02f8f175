//! Connection Handler
//!
//! Handles individual client connections.

use std::io::{BufReader, BufWriter, ErrorKind};
use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;

use crate::engine::{Engine, Reply};
use crate::error::{Result, TaskSlotError};
use crate::protocol::{read_command, write_response, Command, Response};
use crate::store::UpdateOutcome;

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Reference to the engine
    engine: Arc<Engine>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: TcpStream, engine: Arc<Engine>) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            engine,
            peer_addr,
        })
    }

    /// Configure connection timeouts (0 = no timeout)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        if read_ms > 0 {
            self.reader
                .get_ref()
                .set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            self.writer
                .get_ref()
                .set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }
        Ok(())
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Reads commands in a loop and sends responses.
    /// Returns when the client disconnects, goes idle past the read timeout,
    /// or an error occurs.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        loop {
            let command = match read_command(&mut self.reader) {
                Ok(cmd) => cmd,
                Err(TaskSlotError::Io(ref e)) => match e.kind() {
                    ErrorKind::UnexpectedEof
                    | ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted => {
                        tracing::debug!("Client {} disconnected", self.peer_addr);
                        return Ok(());
                    }
                    // Windows reports read timeouts as TimedOut
                    ErrorKind::WouldBlock | ErrorKind::TimedOut => {
                        tracing::debug!("Read timeout for client {}", self.peer_addr);
                        return Ok(());
                    }
                    _ => {
                        tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                        return Err(TaskSlotError::Network(e.to_string()));
                    }
                },
                Err(e) => {
                    tracing::warn!("Bad request from {}: {}", self.peer_addr, e);
                    let _ = self.send_response(Response::error(&e.to_string()));
                    return Err(e);
                }
            };

            tracing::trace!(
                "Received {:?} from {}",
                command.command_type(),
                self.peer_addr
            );

            let response = self.execute_command(command);

            if let Err(e) = self.send_response(response) {
                if let TaskSlotError::Io(ref io_err) = e {
                    if matches!(
                        io_err.kind(),
                        ErrorKind::ConnectionAborted
                            | ErrorKind::ConnectionReset
                            | ErrorKind::BrokenPipe
                    ) {
                        tracing::debug!(
                            "Client {} disconnected before response could be sent: {}",
                            self.peer_addr,
                            e
                        );
                        return Ok(());
                    }
                }
                tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
                return Err(e);
            }
        }
    }

    /// Execute a command and map its outcome to a response
    ///
    /// Duplicate email → CONFLICT, missing record → NOT_FOUND, failed login →
    /// UNAUTHORIZED, any store failure → ERROR.
    fn execute_command(&self, command: Command) -> Response {
        let encoded = self.engine.execute(command).and_then(|reply| match reply {
            Reply::LoggedIn(profile) | Reply::Registered(profile) => Response::ok_value(&profile),
            Reply::LoginDenied => Ok(Response::unauthorized()),
            Reply::DuplicateEmail => Ok(Response::conflict()),
            Reply::Tasks(tasks) => Response::ok_value(&tasks),
            Reply::TaskCreated(task) => Response::ok_value(&task),
            Reply::Updated(UpdateOutcome::Applied) => Ok(Response::ok(None)),
            Reply::Updated(UpdateOutcome::NotFound) => Ok(Response::not_found()),
            Reply::Pong => Ok(Response::ok(Some(b"PONG".to_vec()))),
        });

        match encoded {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Command from {} failed: {}", self.peer_addr, e);
                Response::error(&e.to_string())
            }
        }
    }

    /// Send a response to the client
    fn send_response(&mut self, response: Response) -> Result<()> {
        write_response(&mut self.writer, &response)
    }
}
