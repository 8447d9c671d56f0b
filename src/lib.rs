//! ttt - Team Task Tracker Library
//!
//! This library provides the core functionality for the ttt CLI tool:
//! a small, local task tracker for a fixed team.
//!
//! # Core Concepts
//!
//! - **Team Directory**: a fixed, compiled-in roster of assignable members
//! - **Task Store**: durable CRUD over one serialized task collection,
//!   behind a pluggable blob backing (file for production, memory for tests)
//! - **Application Shell**: the selected user plus a memoized task view,
//!   invalidated through the store's change subscription
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `ttt.toml`
//! - `error`: Error types and result aliases
//! - `events`: JSONL event output for external integrations
//! - `output`: Shared human/JSON output formatting
//! - `shell`: Application shell orchestration
//! - `storage`: Data directory management and blob store backings
//! - `task`: Task records and the task store
//! - `team`: The static team roster

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod shell;
pub mod storage;
pub mod task;
pub mod team;

pub use error::{Error, Result};
