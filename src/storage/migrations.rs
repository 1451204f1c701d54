//! Schema bootstrap for the task table.
//!
//! Each migration upgrades the schema by one version, tracked in
//! `PRAGMA user_version`. Migrations run when the store is opened.

use rusqlite::Connection;
use tracing::info;

use crate::error::TodoError;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, TodoError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| TodoError::Schema(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), TodoError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| TodoError::Schema(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), TodoError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
        info!(version, "Applied schema migration");
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), TodoError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(TodoError::Schema(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: the `Tasks` table.
///
/// `AUTOINCREMENT` keeps ids from being reused, even after every row is
/// deleted.
fn migrate_v1(conn: &Connection) -> Result<(), TodoError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS Tasks (
            Task_ID INTEGER PRIMARY KEY AUTOINCREMENT,
            Task TEXT NOT NULL CHECK(length(Task) BETWEEN 1 AND 255),
            Deadline TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_deadline
        ON Tasks(Deadline, Task_ID);
        ",
    )
    .map_err(|e| TodoError::Schema(format!("Migration v1 failed: {e}")))
}
