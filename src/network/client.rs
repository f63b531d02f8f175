//! Blocking client for the task service

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;

use crate::error::{Result, TaskSlotError};
use crate::protocol::{read_response, write_command, Command, Response, Status};
use crate::record::{Task, UserProfile};
use crate::store::{RegisterOutcome, UpdateOutcome};

/// One connection to a taskslot server
///
/// Statuses the server uses for expected outcomes come back as typed values;
/// only ERROR responses and transport failures are errors.
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl Client {
    pub fn connect(addr: &str) -> Result<Self> {
        let stream = TcpStream::connect(addr)
            .map_err(|e| TaskSlotError::Network(format!("Failed to connect to {}: {}", addr, e)))?;
        stream.set_nodelay(true)?;

        Ok(Self {
            reader: BufReader::new(stream.try_clone()?),
            writer: BufWriter::new(stream),
        })
    }

    /// Send one command and wait for its response
    pub fn call(&mut self, command: &Command) -> Result<Response> {
        write_command(&mut self.writer, command)?;
        read_response(&mut self.reader)
    }

    pub fn ping(&mut self) -> Result<()> {
        let response = self.call(&Command::Ping)?;
        match response.status {
            Status::Ok => Ok(()),
            _ => Err(unexpected(&response)),
        }
    }

    /// `None` when the credentials are rejected
    pub fn login(&mut self, email: &str, password: &str) -> Result<Option<UserProfile>> {
        let response = self.call(&Command::Login {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        match response.status {
            Status::Ok => Ok(Some(response.decode_value()?)),
            Status::Unauthorized => Ok(None),
            _ => Err(unexpected(&response)),
        }
    }

    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<RegisterOutcome> {
        let response = self.call(&Command::Register {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })?;
        match response.status {
            Status::Ok => {
                let profile: UserProfile = response.decode_value()?;
                Ok(RegisterOutcome::Registered(profile.id))
            }
            Status::Conflict => Ok(RegisterOutcome::DuplicateEmail),
            _ => Err(unexpected(&response)),
        }
    }

    pub fn list_tasks(&mut self, owner_id: u32) -> Result<Vec<Task>> {
        let response = self.call(&Command::ListTasks { owner_id })?;
        match response.status {
            Status::Ok => response.decode_value(),
            _ => Err(unexpected(&response)),
        }
    }

    pub fn create_task(
        &mut self,
        owner_id: u32,
        description: &str,
        day: i32,
        month: i32,
        year: i32,
    ) -> Result<Task> {
        let response = self.call(&Command::CreateTask {
            owner_id,
            description: description.to_string(),
            day,
            month,
            year,
        })?;
        match response.status {
            Status::Ok => response.decode_value(),
            _ => Err(unexpected(&response)),
        }
    }

    pub fn toggle_task(&mut self, id: u32) -> Result<UpdateOutcome> {
        let response = self.call(&Command::ToggleTask { id })?;
        update_outcome(&response)
    }

    pub fn edit_task(&mut self, id: u32, description: &str) -> Result<UpdateOutcome> {
        let response = self.call(&Command::EditTask {
            id,
            description: description.to_string(),
        })?;
        update_outcome(&response)
    }

    pub fn delete_task(&mut self, id: u32) -> Result<UpdateOutcome> {
        let response = self.call(&Command::DeleteTask { id })?;
        update_outcome(&response)
    }
}

fn update_outcome(response: &Response) -> Result<UpdateOutcome> {
    match response.status {
        Status::Ok => Ok(UpdateOutcome::Applied),
        Status::NotFound => Ok(UpdateOutcome::NotFound),
        _ => Err(unexpected(response)),
    }
}

fn unexpected(response: &Response) -> TaskSlotError {
    match response.status {
        Status::Error => TaskSlotError::Network(format!("Server error: {}", response.error_message())),
        status => TaskSlotError::Protocol(format!("Unexpected response status {:?}", status)),
    }
}
