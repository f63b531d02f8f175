//! Protocol Module
//!
//! Defines the wire protocol between the task service and its clients.
//!
//! ## Protocol Format (V1 - Framed bincode)
//!
//! ### Request Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ Cmd (1)  │ Len (4)  │   Payload (bincode Command) │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Commands
//! - 0x01: LOGIN        - email, password
//! - 0x02: REGISTER     - name, email, password
//! - 0x03: LIST_TASKS   - owner_id
//! - 0x04: CREATE_TASK  - owner_id, description, day, month, year
//! - 0x05: TOGGLE_TASK  - id
//! - 0x06: EDIT_TASK    - id, description
//! - 0x07: DELETE_TASK  - id
//! - 0x08: PING         - empty
//!
//! ### Response Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Status Codes
//! - 0x00: OK            (payload: bincode value, or empty)
//! - 0x01: NOT_FOUND
//! - 0x02: ERROR         (payload: UTF-8 message)
//! - 0x03: CONFLICT      (duplicate email)
//! - 0x04: UNAUTHORIZED  (login denied)

mod codec;
mod command;
mod response;

pub use codec::{
    decode_command, decode_response, encode_command, encode_response, read_command,
    read_response, write_command, write_response, HEADER_SIZE, MAX_PAYLOAD_SIZE,
};
pub use command::{Command, CommandType};
pub use response::{Response, Status};
