//! User Store
//!
//! Registration with case-insensitive unique emails, login, rename and
//! logical delete.

use std::path::{Path, PathBuf};

use crate::binio::normalize_text;
use crate::config::SyncStrategy;
use crate::error::Result;
use crate::record::user::{self, EMAIL_WIDTH};
use crate::record::User;

use super::{Header, RecordStore, RegisterOutcome, UpdateOutcome};

/// Record store for [`User`]s
pub struct UserStore {
    records: RecordStore<User>,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Self {
        Self {
            records: RecordStore::new(path, sync_strategy),
        }
    }

    pub fn path(&self) -> &Path {
        self.records.path()
    }

    pub fn header(&self) -> Result<Header> {
        self.records.read_header()
    }

    /// Insert a new user unless an active user already has this email
    ///
    /// The duplicate scan and the append are separate file sessions; two
    /// unsynchronized callers can both pass the check.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<RegisterOutcome> {
        if self.find_by_email(email)?.is_some() {
            tracing::debug!("Rejected registration: duplicate email {}", email);
            return Ok(RegisterOutcome::DuplicateEmail);
        }

        let id = self
            .records
            .insert_with(|id| User::new(id, name, email, password))?;
        Ok(RegisterOutcome::Registered(id))
    }

    pub fn find_by_id(&self, id: u32) -> Result<Option<User>> {
        self.records.find_by_id(id)
    }

    /// Active user whose email matches, ignoring case
    ///
    /// The candidate is cut to the field width first, so an over-long email
    /// matches what its registration actually stored.
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let wanted = normalize_text(email, EMAIL_WIDTH).to_lowercase();
        self.records.find(|user| user.email.to_lowercase() == wanted)
    }

    pub fn list_active(&self) -> Result<Vec<User>> {
        self.records.list_active()
    }

    /// The active user with this email and password, if any
    pub fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let user = self
            .find_by_email(email)?
            .filter(|user| user.password_matches(password));

        if user.is_none() {
            tracing::debug!("Login denied for {}", email);
        }
        Ok(user)
    }

    /// Replace the name field only
    pub fn rename(&self, id: u32, name: &str) -> Result<UpdateOutcome> {
        self.records
            .update_field(id, user::NAME_OFFSET, |_, writer| {
                writer.write_text(name, user::NAME_WIDTH)
            })
    }

    pub fn delete(&self, id: u32) -> Result<UpdateOutcome> {
        self.records.logical_delete(id)
    }
}
