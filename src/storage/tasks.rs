//! Task store: CRUD over the `Tasks` table.
//!
//! Every operation is a single parameterized statement. Update and delete
//! report how many rows they touched; zero means the id did not exist and
//! nothing changed.

use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::database::{query_error, Database};
use crate::config::ConnectionSettings;
use crate::core::{validate_deadline, validate_description, validate_id};
use crate::error::TodoError;
use crate::tasks::{Task, TaskId, WriteOutcome};

/// Durable task collection.
pub struct TaskStore {
    db: Database,
}

impl TaskStore {
    /// Open the store described by connection settings and ensure the schema.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Schema` if the backend is unreachable or the
    /// schema cannot be created.
    pub fn open(settings: &ConnectionSettings) -> Result<Self, TodoError> {
        Self::with_database(Database::open(settings)?)
    }

    /// Open a store backed by a specific file.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Schema` if the file cannot be opened or migrated.
    pub fn open_at(path: &Path, timeout: Duration) -> Result<Self, TodoError> {
        Self::with_database(Database::open_at(path, timeout)?)
    }

    /// Open an in-memory store (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Schema` if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self, TodoError> {
        Self::with_database(Database::open_in_memory()?)
    }

    /// Wrap an existing database and ensure the schema.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Schema` if the schema cannot be created.
    pub fn with_database(db: Database) -> Result<Self, TodoError> {
        let store = Self { db };
        store.ensure_schema()?;
        Ok(store)
    }

    /// The underlying database.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Create the `Tasks` table if it is absent. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Schema` if the definition cannot be created.
    pub fn ensure_schema(&self) -> Result<(), TodoError> {
        self.db.migrate()
    }

    /// Insert a task and return its new id.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Validation` for a blank or over-long description
    /// or an out-of-range deadline (nothing is written), or `TodoError::Query` if the insert fails.
    pub fn create(&self, description: &str, deadline: NaiveDate) -> Result<TaskId, TodoError> {
        validate_description(description)?;
        validate_deadline(deadline)?;

        self.db.execute(
            "Insert task",
            "INSERT INTO Tasks (Task, Deadline) VALUES (?1, ?2)",
            params![description, deadline],
        )?;

        let id = self.db.connection().last_insert_rowid();
        debug!(id, %deadline, "Created task");
        Ok(id)
    }

    /// All tasks, earliest deadline first, ties in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Query` if the rows cannot be read. An empty
    /// store is `Ok(vec![])`.
    pub fn list(&self) -> Result<Vec<Task>, TodoError> {
        let mut stmt = self
            .db
            .connection()
            .prepare(
                r"SELECT Task_ID, Task, Deadline
                  FROM Tasks
                  ORDER BY Deadline ASC, Task_ID ASC",
            )
            .map_err(|e| query_error("List tasks", &e))?;

        let rows = stmt
            .query_map([], row_to_task)
            .map_err(|e| query_error("List tasks", &e))?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row.map_err(|e| query_error("Read task row", &e))?);
        }

        debug!(count = tasks.len(), "Listed tasks");
        Ok(tasks)
    }

    /// Look up a single task.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Validation` for a non-positive id, or
    /// `TodoError::Query` if the lookup fails.
    pub fn get(&self, id: TaskId) -> Result<Option<Task>, TodoError> {
        validate_id(id)?;

        self.db
            .connection()
            .query_row(
                "SELECT Task_ID, Task, Deadline FROM Tasks WHERE Task_ID = ?1",
                [id],
                row_to_task,
            )
            .optional()
            .map_err(|e| query_error("Get task", &e))
    }

    /// Rewrite the description and deadline of task `id`.
    ///
    /// A missing id is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Validation` for bad input, or `TodoError::Query`
    /// if the update fails.
    pub fn update(
        &self,
        id: TaskId,
        description: &str,
        deadline: NaiveDate,
    ) -> Result<WriteOutcome, TodoError> {
        validate_id(id)?;
        validate_description(description)?;
        validate_deadline(deadline)?;

        let affected = self.db.execute(
            "Update task",
            "UPDATE Tasks SET Task = ?1, Deadline = ?2 WHERE Task_ID = ?3",
            params![description, deadline, id],
        )?;

        debug!(id, affected, "Updated task");
        Ok(WriteOutcome::new(affected))
    }

    /// Delete task `id`. A missing id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Query` if the delete fails.
    pub fn delete_one(&self, id: TaskId) -> Result<WriteOutcome, TodoError> {
        validate_id(id)?;

        let affected = self.db.execute(
            "Delete task",
            "DELETE FROM Tasks WHERE Task_ID = ?1",
            params![id],
        )?;

        debug!(id, affected, "Deleted task");
        Ok(WriteOutcome::new(affected))
    }

    /// Delete every task. The id counter keeps counting from where it was.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Query` if the delete fails.
    pub fn delete_all(&self) -> Result<WriteOutcome, TodoError> {
        let affected = self
            .db
            .execute("Delete all tasks", "DELETE FROM Tasks", params![])?;

        debug!(affected, "Deleted all tasks");
        Ok(WriteOutcome::new(affected))
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        deadline: row.get(2)?,
    })
}
