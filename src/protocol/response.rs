//! Response definitions
//!
//! Represents responses to clients.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, TaskSlotError};

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0x00,
    NotFound = 0x01,
    Error = 0x02,
    Conflict = 0x03,
    Unauthorized = 0x04,
}

impl Status {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Status::Ok),
            0x01 => Some(Status::NotFound),
            0x02 => Some(Status::Error),
            0x03 => Some(Status::Conflict),
            0x04 => Some(Status::Unauthorized),
            _ => None,
        }
    }
}

/// A response to send to client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Optional payload (bincode value for OK, message for ERROR)
    pub payload: Option<Vec<u8>>,
}

impl Response {
    /// Create an OK response with optional payload
    pub fn ok(payload: Option<Vec<u8>>) -> Self {
        Self {
            status: Status::Ok,
            payload,
        }
    }

    /// Create an OK response carrying a bincode-encoded value
    pub fn ok_value<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self::ok(Some(bincode::serialize(value)?)))
    }

    /// Create a NOT_FOUND response
    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            payload: None,
        }
    }

    /// Create a CONFLICT response
    pub fn conflict() -> Self {
        Self {
            status: Status::Conflict,
            payload: None,
        }
    }

    /// Create an UNAUTHORIZED response
    pub fn unauthorized() -> Self {
        Self {
            status: Status::Unauthorized,
            payload: None,
        }
    }

    /// Create an ERROR response
    pub fn error(message: &str) -> Self {
        Self {
            status: Status::Error,
            payload: Some(message.as_bytes().to_vec()),
        }
    }

    /// Decode the payload of an OK response
    pub fn decode_value<T: DeserializeOwned>(&self) -> Result<T> {
        let payload = self.payload.as_deref().ok_or_else(|| {
            TaskSlotError::Protocol("Expected a payload, response was empty".to_string())
        })?;
        Ok(bincode::deserialize(payload)?)
    }

    /// The message of an ERROR response
    pub fn error_message(&self) -> String {
        self.payload
            .as_deref()
            .map(|p| String::from_utf8_lossy(p).into_owned())
            .unwrap_or_default()
    }
}
