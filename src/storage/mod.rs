//! Storage layer for todolist.
//!
//! `SQLite`-backed persistence for the task collection:
//! - `Database`: connection, busy timeout, error mapping
//! - `TaskStore`: schema bootstrap and CRUD over `Tasks`

mod database;
mod migrations;
mod tasks;

pub use database::{Database, DEFAULT_TIMEOUT};
pub use migrations::CURRENT_VERSION;
pub use tasks::TaskStore;
