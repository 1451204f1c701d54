//! todolist - a small task tracker with deadlines
//!
//! Tasks (a description plus a deadline) live in a single `Tasks` table.
//! [`TaskStore`] owns the schema and the CRUD statements; the `todolist`
//! binary is a thin command-line front end over it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tasks;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TodoError;
pub use storage::TaskStore;
pub use tasks::{Task, TaskId, WriteOutcome};
