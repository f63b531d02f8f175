//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request (Command) Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ Cmd (1)  │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! The payload is the bincode encoding of the whole [`Command`]; the command
//! byte is redundant with it and must agree.
//!
//! ### Response Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```

use std::io::{Read, Write};

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{Result, TaskSlotError};

use super::{Command, CommandType, Response, Status};

/// Header size: 1 byte command/status + 4 bytes length
pub const HEADER_SIZE: usize = 5;

/// Maximum payload size (16 MB)
pub const MAX_PAYLOAD_SIZE: u32 = 16 * 1024 * 1024;

// =============================================================================
// Framing
// =============================================================================

/// Build `kind (1) + len (4, BE) + payload`
fn encode_frame(kind: u8, payload: &[u8]) -> Vec<u8> {
    let mut message = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    message.put_u8(kind);
    message.put_u32(payload.len() as u32);
    message.put_slice(payload);
    message.to_vec()
}

/// Validate a payload length announced in a header
fn check_payload_len(payload_len: usize, what: &str) -> Result<()> {
    if payload_len > MAX_PAYLOAD_SIZE as usize {
        return Err(TaskSlotError::Protocol(format!(
            "{} payload too large: {} bytes (max {})",
            what, payload_len, MAX_PAYLOAD_SIZE
        )));
    }
    Ok(())
}

/// Split a complete frame into its kind byte and payload
fn split_frame<'a>(bytes: &'a [u8], what: &str) -> Result<(u8, &'a [u8])> {
    if bytes.len() < HEADER_SIZE {
        return Err(TaskSlotError::Protocol(format!(
            "Incomplete {} header: expected {} bytes, got {}",
            what,
            HEADER_SIZE,
            bytes.len()
        )));
    }

    let mut header = &bytes[..HEADER_SIZE];
    let kind = header.get_u8();
    let payload_len = header.get_u32() as usize;
    check_payload_len(payload_len, what)?;

    let total_len = HEADER_SIZE + payload_len;
    if bytes.len() < total_len {
        return Err(TaskSlotError::Protocol(format!(
            "Incomplete {} payload: expected {} bytes, got {}",
            what,
            total_len,
            bytes.len()
        )));
    }

    Ok((kind, &bytes[HEADER_SIZE..total_len]))
}

/// Read one complete frame from a stream
///
/// Blocks until the frame is complete or an error occurs
fn read_frame<R: Read>(reader: &mut R, what: &str) -> Result<Vec<u8>> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let payload_len = (&header[1..]).get_u32() as usize;
    check_payload_len(payload_len, what)?;

    let mut message = vec![0u8; HEADER_SIZE + payload_len];
    message[..HEADER_SIZE].copy_from_slice(&header);
    if payload_len > 0 {
        reader.read_exact(&mut message[HEADER_SIZE..])?;
    }

    Ok(message)
}

// =============================================================================
// Command Encoding/Decoding
// =============================================================================

/// Encode a command to bytes
///
/// Format: cmd_type (1) + payload_len (4) + bincode(command)
pub fn encode_command(command: &Command) -> Result<Vec<u8>> {
    let payload = bincode::serialize(command)?;
    Ok(encode_frame(command.command_type() as u8, &payload))
}

/// Decode a command from bytes
pub fn decode_command(bytes: &[u8]) -> Result<Command> {
    let (cmd_byte, payload) = split_frame(bytes, "command")?;

    let cmd_type = CommandType::from_byte(cmd_byte).ok_or_else(|| {
        TaskSlotError::Protocol(format!("Unknown command type: 0x{:02x}", cmd_byte))
    })?;

    let command: Command = bincode::deserialize(payload).map_err(|e| {
        TaskSlotError::Protocol(format!("{:?} command: malformed payload: {}", cmd_type, e))
    })?;

    if command.command_type() != cmd_type {
        return Err(TaskSlotError::Protocol(format!(
            "Command byte 0x{:02x} does not match payload {:?}",
            cmd_byte,
            command.command_type()
        )));
    }

    Ok(command)
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to bytes
///
/// Format: status (1) + payload_len (4) + payload
pub fn encode_response(response: &Response) -> Vec<u8> {
    let payload = response.payload.as_deref().unwrap_or(&[]);
    encode_frame(response.status as u8, payload)
}

/// Decode a response from bytes
pub fn decode_response(bytes: &[u8]) -> Result<Response> {
    let (status_byte, payload) = split_frame(bytes, "response")?;

    let status = Status::from_byte(status_byte).ok_or_else(|| {
        TaskSlotError::Protocol(format!("Unknown response status: 0x{:02x}", status_byte))
    })?;

    let payload = if payload.is_empty() {
        None
    } else {
        Some(payload.to_vec())
    };

    Ok(Response { status, payload })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete command from a stream
pub fn read_command<R: Read>(reader: &mut R) -> Result<Command> {
    let message = read_frame(reader, "command")?;
    decode_command(&message)
}

/// Write a command to a stream
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    let bytes = encode_command(command)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Read a complete response from a stream
pub fn read_response<R: Read>(reader: &mut R) -> Result<Response> {
    let message = read_frame(reader, "response")?;
    decode_response(&message)
}

/// Write a response to a stream
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    let bytes = encode_response(response);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
