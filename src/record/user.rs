//! User record layout

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::binio::{text_size, BinReader, BinWriter, BOOL_SIZE, INT_SIZE};
use crate::error::Result;

use super::obfuscate::stored_form;
use super::Record;

// =============================================================================
// Layout
// =============================================================================

pub const NAME_WIDTH: usize = 60;
pub const EMAIL_WIDTH: usize = 40;
pub const PASSWORD_WIDTH: usize = 20;

pub const ID_OFFSET: u64 = 0;
pub const NAME_OFFSET: u64 = ID_OFFSET + INT_SIZE;
pub const EMAIL_OFFSET: u64 = NAME_OFFSET + text_size(NAME_WIDTH);
pub const PASSWORD_OFFSET: u64 = EMAIL_OFFSET + text_size(EMAIL_WIDTH);
pub const ACTIVE_OFFSET: u64 = PASSWORD_OFFSET + text_size(PASSWORD_WIDTH);

/// 4 + 120 + 80 + 40 + 1
pub const RECORD_SIZE: u64 = ACTIVE_OFFSET + BOOL_SIZE;

// =============================================================================
// User
// =============================================================================

/// A registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// XOR-obfuscated password as the field holds it, see [`super::obfuscate`]
    pub password: String,
    pub active: bool,
}

impl User {
    /// Build an active user, storing the plain-text password in obfuscated form
    pub fn new(id: u32, name: &str, email: &str, password: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: stored_form(password),
            active: true,
        }
    }

    /// Compare a plain-text candidate against the stored obfuscated password
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == stored_form(candidate)
    }

    /// The public view of this user (no password)
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl Record for User {
    const SIZE: u64 = RECORD_SIZE;
    const ACTIVE_OFFSET: u64 = ACTIVE_OFFSET;
    const KIND: &'static str = "user";

    fn id(&self) -> u32 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn read_from(reader: &mut BinReader) -> Result<Self> {
        Ok(Self {
            id: reader.read_u32()?,
            name: reader.read_text(NAME_WIDTH)?,
            email: reader.read_text(EMAIL_WIDTH)?,
            password: reader.read_raw_text(PASSWORD_WIDTH)?,
            active: reader.read_bool()?,
        })
    }

    fn write_to(&self, writer: &mut BinWriter) -> Result<()> {
        writer.write_u32(self.id)?;
        writer.write_text(&self.name, NAME_WIDTH)?;
        writer.write_text(&self.email, EMAIL_WIDTH)?;
        writer.write_text(&self.password, PASSWORD_WIDTH)?;
        writer.write_bool(self.active)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} | {}", self.id, self.name, self.email)
    }
}

/// What a caller outside the store gets to see of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} | {}", self.id, self.name, self.email)
    }
}
