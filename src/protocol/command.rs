//! Command definitions
//!
//! Represents requests from clients.

use serde::{Deserialize, Serialize};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandType {
    Login = 0x01,
    Register = 0x02,
    ListTasks = 0x03,
    CreateTask = 0x04,
    ToggleTask = 0x05,
    EditTask = 0x06,
    DeleteTask = 0x07,
    Ping = 0x08,
}

impl CommandType {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(CommandType::Login),
            0x02 => Some(CommandType::Register),
            0x03 => Some(CommandType::ListTasks),
            0x04 => Some(CommandType::CreateTask),
            0x05 => Some(CommandType::ToggleTask),
            0x06 => Some(CommandType::EditTask),
            0x07 => Some(CommandType::DeleteTask),
            0x08 => Some(CommandType::Ping),
            _ => None,
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Check credentials
    Login { email: String, password: String },

    /// Create an account
    Register {
        name: String,
        email: String,
        password: String,
    },

    /// Active tasks of one user
    ListTasks { owner_id: u32 },

    /// Add a task
    CreateTask {
        owner_id: u32,
        description: String,
        day: i32,
        month: i32,
        year: i32,
    },

    /// Flip a task between done and pending
    ToggleTask { id: u32 },

    /// Replace a task's description
    EditTask { id: u32, description: String },

    /// Soft-delete a task
    DeleteTask { id: u32 },

    /// Ping (health check)
    Ping,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Login { .. } => CommandType::Login,
            Command::Register { .. } => CommandType::Register,
            Command::ListTasks { .. } => CommandType::ListTasks,
            Command::CreateTask { .. } => CommandType::CreateTask,
            Command::ToggleTask { .. } => CommandType::ToggleTask,
            Command::EditTask { .. } => CommandType::EditTask,
            Command::DeleteTask { .. } => CommandType::DeleteTask,
            Command::Ping => CommandType::Ping,
        }
    }
}
