//! Binary I/O Module
//!
//! Positional reads and writes of the primitive encodings every store file
//! is built from.
//!
//! ## Encodings
//! ```text
//! int    : 4 bytes, big-endian (signed or unsigned view)
//! bool   : 1 byte, 0x00 = false, anything else = true (written as 0x01)
//! text(N): N UTF-16 code units, 2 bytes each, big-endian,
//!          space-padded on the right, never null-terminated
//! date   : int day | int month | int year (12 bytes)
//! ```
//!
//! ## Handle lifetime
//! A reader or writer is opened for one logical operation and dropped at the
//! end of it. Nothing holds a file handle between store calls.

mod reader;
mod text;
mod writer;

pub use reader::BinReader;
pub use text::{
    decode_raw_text, decode_text, encode_text, normalize_raw_text, normalize_text, CODE_UNIT_SIZE,
};
pub use writer::BinWriter;

/// Size of an encoded integer
pub const INT_SIZE: u64 = 4;

/// Size of an encoded boolean
pub const BOOL_SIZE: u64 = 1;

/// Size of an encoded (day, month, year) date
pub const DATE_SIZE: u64 = 3 * INT_SIZE;

/// On-disk size of a text field of `width` code units
pub const fn text_size(width: usize) -> u64 {
    (width * CODE_UNIT_SIZE) as u64
}
