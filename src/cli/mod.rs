//! Command-line interface for ttt
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::events::{Event, EventDestination};
use crate::shell::AppShell;
use crate::storage::{FileStore, Storage};
use crate::task::TaskStore;

mod add;
mod list;
mod team;
mod toggle;
mod user;

/// ttt - Team Task Tracker
///
/// A CLI for tracking a small team's tasks: pick a user, add tasks,
/// assign them, and toggle completion. State lives in a local data
/// directory, one JSON blob for the whole collection.
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "TTT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit JSONL events to a file, or "-" for stdout
    #[arg(long, global = true, value_name = "PATH")]
    pub events: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the team roster
    Team,

    /// Select or show the current user
    #[command(subcommand)]
    User(UserCommands),

    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Assignee member id (defaults to the selected user)
        #[arg(long)]
        assignee: Option<String>,
    },

    /// List tasks (the selected user's by default)
    List {
        /// Filter by assignee member id
        #[arg(long)]
        assignee: Option<String>,

        /// List every task regardless of assignee
        #[arg(long)]
        all: bool,
    },

    /// Toggle a task's completion flag
    Toggle {
        /// Task id
        id: String,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Select a team member as the current user
    Set {
        /// Member id
        id: String,
    },

    /// Show the current user
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Team => team::run(team::TeamOptions {
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::User(cmd) => match cmd {
                UserCommands::Set { id } => user::run_set(user::SetOptions {
                    id,
                    events: self.events,
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
                UserCommands::Show => user::run_show(user::ShowOptions {
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
            },
            Commands::Add { title, assignee } => add::run(add::AddOptions {
                title,
                assignee,
                events: self.events,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List { assignee, all } => list::run(list::ListOptions {
                assignee,
                all,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Toggle { id } => toggle::run(toggle::ToggleOptions {
                id,
                events: self.events,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}

/// Resolve the storage root from the CLI argument or the platform default.
pub(crate) fn resolve_storage(data_dir: Option<PathBuf>) -> Result<Storage> {
    match data_dir {
        Some(path) => Ok(Storage::new(path)),
        None => Storage::default_location(),
    }
}

/// Build a file-backed task store over the given storage.
pub(crate) fn open_store(storage: &Storage) -> TaskStore {
    TaskStore::new(Box::new(FileStore::new(storage.clone())))
}

/// Build the application shell: file-backed store plus configured defaults.
pub(crate) fn open_shell(storage: Storage) -> Result<AppShell> {
    let config = Config::load(&storage.config_file())?;
    let store = open_store(&storage);
    Ok(AppShell::new(store, storage, config.default_user.as_deref()))
}

/// Emit an event to the configured destination, if any.
pub(crate) fn emit_event(events: Option<&str>, event: Event) -> Result<()> {
    if let Some(destination) = EventDestination::parse(events) {
        destination.open()?.emit(&event)?;
    }
    Ok(())
}
