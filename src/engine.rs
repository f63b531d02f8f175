//! Engine Module
//!
//! Owns the user and task stores and exposes the entry points the service
//! layer calls.
//!
//! ## Responsibilities
//! - Lay out the data directory (`users.bin`, `tasks.bin`)
//! - Route protocol commands to store operations
//! - Serialize mutations from concurrent connections

use std::fs;
use std::path::Path;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{Result, TaskSlotError};
use crate::protocol::Command;
use crate::record::{Task, UserProfile};
use crate::store::{RegisterOutcome, TaskStore, UpdateOutcome, UserStore};

/// Typed outcome of an executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    LoggedIn(UserProfile),
    LoginDenied,
    Registered(UserProfile),
    DuplicateEmail,
    Tasks(Vec<Task>),
    TaskCreated(Task),
    Updated(UpdateOutcome),
    Pong,
}

/// The task-tracking engine
///
/// ## Concurrency Model
///
/// The stores themselves take no locks: each call is a handful of separate
/// open/read/write/close sessions. When several connections share one
/// engine, two inserts could otherwise both pass the duplicate-email check
/// or both claim the same slot from a stale header.
///
/// - **Writes** (register/create/toggle/edit/delete): serialized by
///   `write_lock`, which is held for the whole read-check-write sequence
/// - **Reads** (login/list): unlocked; a concurrent insert is invisible
///   until its header rewrite lands
///
/// This does not protect against a second process opening the same files.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// `{data_dir}/users.bin`
    users: UserStore,

    /// `{data_dir}/tasks.bin`
    tasks: TaskStore,

    /// Serializes mutating entry points
    write_lock: Mutex<()>,
}

impl Engine {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const USERS_FILENAME: &'static str = "users.bin";
    const TASKS_FILENAME: &'static str = "tasks.bin";

    /// Open or create an engine with the given config
    ///
    /// Store files are created lazily by the first insert.
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let users = UserStore::new(
            config.data_dir.join(Self::USERS_FILENAME),
            config.sync_strategy,
        );
        let tasks = TaskStore::new(
            config.data_dir.join(Self::TASKS_FILENAME),
            config.sync_strategy,
        );

        let user_header = users.header()?;
        let task_header = tasks.header()?;
        tracing::info!(
            "Opened stores in {}: {} users ({} slots), {} tasks ({} slots)",
            config.data_dir.display(),
            user_header.active_count,
            user_header.total_records,
            task_header.active_count,
            task_header.total_records
        );

        Ok(Self {
            config,
            users,
            tasks,
            write_lock: Mutex::new(()),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }

    /// Execute a command
    ///
    /// Routes commands to the matching entry point
    pub fn execute(&self, command: Command) -> Result<Reply> {
        match command {
            Command::Login { email, password } => Ok(match self.login(&email, &password)? {
                Some(profile) => Reply::LoggedIn(profile),
                None => Reply::LoginDenied,
            }),
            Command::Register {
                name,
                email,
                password,
            } => Ok(match self.register(&name, &email, &password)? {
                RegisterOutcome::Registered(id) => Reply::Registered(self.stored_profile(id)?),
                RegisterOutcome::DuplicateEmail => Reply::DuplicateEmail,
            }),
            Command::ListTasks { owner_id } => Ok(Reply::Tasks(self.list_tasks(owner_id)?)),
            Command::CreateTask {
                owner_id,
                description,
                day,
                month,
                year,
            } => Ok(Reply::TaskCreated(
                self.create_task(owner_id, &description, day, month, year)?,
            )),
            Command::ToggleTask { id } => Ok(Reply::Updated(self.toggle_task(id)?)),
            Command::EditTask { id, description } => {
                Ok(Reply::Updated(self.edit_task(id, &description)?))
            }
            Command::DeleteTask { id } => Ok(Reply::Updated(self.delete_task(id)?)),
            Command::Ping => Ok(Reply::Pong),
        }
    }

    // =========================================================================
    // Entry Points
    // =========================================================================

    /// Profile of the active user with these credentials
    pub fn login(&self, email: &str, password: &str) -> Result<Option<UserProfile>> {
        Ok(self.users.login(email, password)?.map(|user| user.profile()))
    }

    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<RegisterOutcome> {
        let _write_guard = self.write_lock.lock();
        self.users.register(name, email, password)
    }

    /// Profile of a user as stored, after width and padding rules applied
    fn stored_profile(&self, id: u32) -> Result<UserProfile> {
        self.users
            .find_by_id(id)?
            .map(|user| user.profile())
            .ok_or_else(|| TaskSlotError::Storage(format!("User {} not readable after insert", id)))
    }

    /// Active tasks of `owner_id` in creation order
    pub fn list_tasks(&self, owner_id: u32) -> Result<Vec<Task>> {
        self.tasks.list_by_owner(owner_id)
    }

    /// Create a task and return it as stored
    pub fn create_task(
        &self,
        owner_id: u32,
        description: &str,
        day: i32,
        month: i32,
        year: i32,
    ) -> Result<Task> {
        let _write_guard = self.write_lock.lock();

        let id = self.tasks.create(owner_id, description, day, month, year)?;
        self.tasks.find_by_id(id)?.ok_or_else(|| {
            TaskSlotError::Storage(format!("Task {} not readable after insert", id))
        })
    }

    pub fn toggle_task(&self, id: u32) -> Result<UpdateOutcome> {
        let _write_guard = self.write_lock.lock();
        self.tasks.toggle_done(id)
    }

    pub fn edit_task(&self, id: u32, description: &str) -> Result<UpdateOutcome> {
        let _write_guard = self.write_lock.lock();
        self.tasks.edit_description(id, description)
    }

    pub fn delete_task(&self, id: u32) -> Result<UpdateOutcome> {
        let _write_guard = self.write_lock.lock();
        self.tasks.delete(id)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Direct access to the user store
    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// Direct access to the task store
    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }
}
