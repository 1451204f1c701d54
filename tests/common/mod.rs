#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use assert_cmd::Command;
use chrono::NaiveDate;
use tempfile::TempDir;
use todolist::storage::TaskStore;

pub fn init_test_logging() {
    todolist::logging::init_test_logging();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn test_store() -> TaskStore {
    init_test_logging();
    TaskStore::open_in_memory().expect("Failed to create test store")
}

pub fn test_store_with_dir() -> (TaskStore, PathBuf, TempDir) {
    init_test_logging();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tasks.db");
    let store = TaskStore::open_at(&path, Duration::from_secs(5)).expect("Failed to open store");
    (store, path, dir)
}

/// `todolist` binary pointed at an isolated home with complete settings.
pub fn todolist(home: &TempDir) -> Command {
    let mut cmd = bare_todolist(home);
    cmd.env("TODOLIST_DB_HOST", "localhost")
        .env("TODOLIST_DB_USER", "tester")
        .env("TODOLIST_DB_PASSWORD", "hunter2")
        .env("TODOLIST_DB_NAME", "todolistbase");
    cmd
}

/// `todolist` binary with no connection settings at all.
pub fn bare_todolist(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todolist").expect("binary builds");
    cmd.env("TODOLIST_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("TODOLIST_DB_HOST")
        .env_remove("TODOLIST_DB_USER")
        .env_remove("TODOLIST_DB_PASSWORD")
        .env_remove("TODOLIST_DB_NAME")
        .env_remove("TODOLIST_DB_TIMEOUT");
    cmd
}
