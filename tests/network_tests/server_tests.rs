//! Tests for Server and Client
//!
//! These tests verify:
//! - A full register/login/task flow over TCP
//! - Status mapping for expected outcomes
//! - Bad frames answered with an ERROR response
//! - Config validation and graceful shutdown

use std::io::Write;
use std::net::TcpStream;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use taskslot::config::Config;
use taskslot::engine::Engine;
use taskslot::network::{Client, Server, ShutdownHandle};
use taskslot::protocol::{read_response, Command, Status};
use taskslot::store::{RegisterOutcome, UpdateOutcome};
use taskslot::TaskSlotError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

struct TestServer {
    _temp_dir: TempDir,
    addr: String,
    shutdown: ShutdownHandle,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    fn start() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::builder()
            .data_dir(temp_dir.path())
            .listen_addr("127.0.0.1:0")
            .worker_threads(2)
            .read_timeout_ms(1000)
            .build();
        let engine = Arc::new(Engine::open(config.clone()).unwrap());
        let server = Server::bind(config, engine).unwrap();

        let addr = server.local_addr().unwrap().to_string();
        let shutdown = server.shutdown_handle();
        let handle = thread::spawn(move || server.run().unwrap());

        Self {
            _temp_dir: temp_dir,
            addr,
            shutdown,
            handle: Some(handle),
        }
    }

    fn client(&self) -> Client {
        Client::connect(&self.addr).unwrap()
    }

    fn stop(mut self) {
        self.shutdown.shutdown();
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
    }
}

// =============================================================================
// Client Flow Tests
// =============================================================================

#[test]
fn test_ping() {
    let server = TestServer::start();
    {
        let mut client = server.client();
        client.ping().unwrap();
        client.ping().unwrap();
    }
    server.stop();
}

#[test]
fn test_account_flow() {
    let server = TestServer::start();
    {
        let mut client = server.client();

        let outcome = client.register("Ana", "ana@example.com", "abc").unwrap();
        assert_eq!(outcome, RegisterOutcome::Registered(1));

        let duplicate = client.register("Ana", "ANA@example.com", "xyz").unwrap();
        assert_eq!(duplicate, RegisterOutcome::DuplicateEmail);

        let profile = client.login("ana@example.com", "abc").unwrap().unwrap();
        assert_eq!(profile.id, 1);
        assert_eq!(profile.name, "Ana");

        assert!(client.login("ana@example.com", "abx").unwrap().is_none());
    }
    server.stop();
}

#[test]
fn test_task_flow() {
    let server = TestServer::start();
    {
        let mut client = server.client();

        let task = client.create_task(1, "Buy milk", 5, 6, 2024).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.description, "Buy milk");

        assert_eq!(client.toggle_task(task.id).unwrap(), UpdateOutcome::Applied);
        assert_eq!(client.edit_task(task.id, "Buy oat milk").unwrap(), UpdateOutcome::Applied);

        let tasks = client.list_tasks(1).unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].done);
        assert_eq!(tasks[0].description, "Buy oat milk");

        assert_eq!(client.delete_task(task.id).unwrap(), UpdateOutcome::Applied);
        assert!(client.list_tasks(1).unwrap().is_empty());
        assert_eq!(client.delete_task(task.id).unwrap(), UpdateOutcome::NotFound);
        assert_eq!(client.toggle_task(99).unwrap(), UpdateOutcome::NotFound);
    }
    server.stop();
}

#[test]
fn test_clients_share_the_store() {
    let server = TestServer::start();
    {
        let mut writer = server.client();
        let mut reader = server.client();

        writer.create_task(4, "shared", 1, 1, 2024).unwrap();

        assert_eq!(reader.list_tasks(4).unwrap()[0].description, "shared");
    }
    server.stop();
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_unknown_command_gets_error_response() {
    let server = TestServer::start();
    {
        let mut stream = TcpStream::connect(&server.addr).unwrap();
        stream.write_all(&[0x7f, 0, 0, 0, 0]).unwrap();
        stream.flush().unwrap();

        let response = read_response(&mut stream).unwrap();
        assert_eq!(response.status, Status::Error);
        assert!(!response.error_message().is_empty());
    }
    server.stop();
}

#[test]
fn test_acceptor_survives_dropped_peers() {
    let server = TestServer::start();
    for _ in 0..5 {
        drop(TcpStream::connect(&server.addr).unwrap());
    }
    {
        let mut client = server.client();
        client.ping().unwrap();
    }
    server.stop();
}

#[test]
fn test_raw_call_status_codes() {
    let server = TestServer::start();
    {
        let mut client = server.client();

        let response = client
            .call(&Command::Login {
                email: "nobody@example.com".to_string(),
                password: "x".to_string(),
            })
            .unwrap();
        assert_eq!(response.status, Status::Unauthorized);

        let response = client.call(&Command::DeleteTask { id: 1 }).unwrap();
        assert_eq!(response.status, Status::NotFound);
    }
    server.stop();
}

#[test]
fn test_invalid_config_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp_dir.path())
        .listen_addr("127.0.0.1:0")
        .worker_threads(0)
        .build();
    let engine = Arc::new(Engine::open(config.clone()).unwrap());

    match Server::bind(config, engine) {
        Err(TaskSlotError::Config(_)) => {}
        Err(e) => panic!("Expected config error, got {}", e),
        Ok(_) => panic!("Expected config error, server bound"),
    }
}

#[test]
fn test_connect_refused_is_network_error() {
    let server = TestServer::start();
    let addr = server.addr.clone();
    server.stop();

    match Client::connect(&addr) {
        Err(TaskSlotError::Network(_)) => {}
        Err(e) => panic!("Expected network error, got {}", e),
        Ok(_) => panic!("Expected connect to fail after shutdown"),
    }
}
